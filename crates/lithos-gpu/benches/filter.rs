//! Filter micro-benchmark over a synthetic device population.

use criterion::{criterion_group, criterion_main, Criterion};
use lithos_core::filter;
use lithos_gpu::limits::{CompareOp, DeviceLimits, LimitKind};
use lithos_gpu::{
    DeviceFeatures, DeviceKind, DeviceRequirements, Gpu, GpuVendor, QueueFamily, QueueKind,
};
use std::collections::HashSet;

fn synthetic_gpu(index: u32) -> Gpu {
    let discrete = index % 2 == 0;
    let mut extensions = HashSet::new();
    extensions.insert("VK_KHR_swapchain".to_string());

    let mut limits = DeviceLimits::default();
    limits.max_image_dimension_2d = if discrete { 16384 } else { 4096 };

    Gpu {
        name: format!("Synthetic GPU {index}"),
        vendor: GpuVendor::Other(index),
        kind: if discrete {
            DeviceKind::DISCRETE
        } else {
            DeviceKind::INTEGRATED
        },
        api_version: ash::vk::make_api_version(0, 1, 3, 0),
        driver_version: 1,
        features: DeviceFeatures::GEOMETRY_SHADER | DeviceFeatures::SAMPLER_ANISOTROPY,
        limits,
        queue_families: vec![
            QueueFamily {
                kind: QueueKind::GRAPHICS | QueueKind::COMPUTE | QueueKind::TRANSFER,
                count: 1,
                index: 0,
            },
            QueueFamily {
                kind: QueueKind::TRANSFER,
                count: 2,
                index: 1,
            },
        ],
        extensions,
        native: None,
    }
}

fn bench_filter(c: &mut Criterion) {
    let gpus: Vec<Gpu> = (0..64).map(synthetic_gpu).collect();

    let requirements = DeviceRequirements::new()
        .kind(DeviceKind::DISCRETE)
        .features(DeviceFeatures::GEOMETRY_SHADER)
        .queue_family(QueueKind::GRAPHICS, 1)
        .queue_family(QueueKind::TRANSFER, 2)
        .extension("VK_KHR_swapchain")
        .limit(LimitKind::MaxImageDimension2D, CompareOp::GreaterOrEqual, 8192u32);

    c.bench_function("filter_64_devices", |b| {
        b.iter(|| filter(std::hint::black_box(&gpus), &requirements))
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
