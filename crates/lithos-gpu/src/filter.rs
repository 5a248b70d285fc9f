//! Device requirements and the selection gates.
//!
//! [`DeviceRequirements`] is the application's statement of what a usable
//! device looks like. A candidate passes only if it clears every gate:
//! kind, features, queue families, extensions, limits. Filtering itself is
//! [`lithos_core::select::filter`]; this module supplies the
//! [`Criteria`] implementation.

use crate::flags::{DeviceFeatures, DeviceKind, QueueKind};
use crate::gpu::Gpu;
use crate::limits::{CompareOp, LimitKind, LimitValue};
use lithos_core::Criteria;
use std::mem;

/// One queue family the application needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFamilyRequirement {
    /// Capabilities the family must carry, all of them.
    pub kind: QueueKind,
    /// Minimum number of queues in the family.
    pub count: u32,
}

/// One limit the device must satisfy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitRequirement {
    /// Which limit is checked.
    pub kind: LimitKind,
    /// How the reported value is compared against the threshold.
    pub op: CompareOp,
    /// The threshold value; its variant must match the limit's value type.
    pub threshold: LimitValue,
}

impl LimitRequirement {
    /// Build a limit requirement.
    ///
    /// A threshold whose type does not match the limit's value type is a
    /// programming error at the call site, caught here in debug builds.
    pub fn new(kind: LimitKind, op: CompareOp, threshold: impl Into<LimitValue>) -> Self {
        let threshold = threshold.into();
        debug_assert_eq!(
            mem::discriminant(&crate::limits::DeviceLimits::default().get(kind)),
            mem::discriminant(&threshold),
            "threshold type does not match limit {kind:?}"
        );
        Self {
            kind,
            op,
            threshold,
        }
    }
}

/// What the application requires of a device.
///
/// The default value requires nothing and therefore matches every device.
#[derive(Debug, Clone, Default)]
pub struct DeviceRequirements {
    /// Acceptable device kinds; a device must carry ANY of these bits.
    /// Empty means unconstrained.
    pub kind: DeviceKind,
    /// Features the device must support, all of them.
    pub features: DeviceFeatures,
    /// Queue families needed, each satisfied by a distinct family.
    pub queue_families: Vec<QueueFamilyRequirement>,
    /// Device extensions that must all be supported.
    pub extensions: Vec<String>,
    /// Limits that must all hold.
    pub limits: Vec<LimitRequirement>,
}

impl DeviceRequirements {
    /// Create an empty requirement set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept devices carrying any of the given kind bits.
    #[must_use]
    pub fn kind(mut self, kind: DeviceKind) -> Self {
        self.kind = kind;
        self
    }

    /// Require the given features (in addition to any already required).
    #[must_use]
    pub fn features(mut self, features: DeviceFeatures) -> Self {
        self.features |= features;
        self
    }

    /// Require a queue family with the given capabilities and queue count.
    #[must_use]
    pub fn queue_family(mut self, kind: QueueKind, count: u32) -> Self {
        self.queue_families.push(QueueFamilyRequirement { kind, count });
        self
    }

    /// Require a device extension by name.
    #[must_use]
    pub fn extension(mut self, name: impl Into<String>) -> Self {
        self.extensions.push(name.into());
        self
    }

    /// Require a limit comparison to hold.
    #[must_use]
    pub fn limit(
        mut self,
        kind: LimitKind,
        op: CompareOp,
        threshold: impl Into<LimitValue>,
    ) -> Self {
        self.limits.push(LimitRequirement::new(kind, op, threshold));
        self
    }

    /// Returns true if `gpu` clears all five gates.
    #[must_use]
    pub fn matches(&self, gpu: &Gpu) -> bool {
        self.kind_gate(gpu)
            && self.feature_gate(gpu)
            && self.queue_family_gate(gpu)
            && self.extension_gate(gpu)
            && self.limit_gate(gpu)
    }

    /// Device kind must intersect the required kinds (any-of match).
    fn kind_gate(&self, gpu: &Gpu) -> bool {
        self.kind.is_empty() || gpu.kind.intersects(self.kind)
    }

    /// Every required feature bit must be present.
    fn feature_gate(&self, gpu: &Gpu) -> bool {
        gpu.features.contains(self.features)
    }

    /// Each requirement claims a distinct family, greedy first-fit in list
    /// order, no backtracking. A family satisfies a requirement when it
    /// carries all the required kind bits and at least the required count.
    ///
    /// Greedy matching is order-dependent: a device can be rejected even
    /// though a different assignment order would satisfy the requirements.
    /// That behavior is deliberate and pinned down by tests.
    fn queue_family_gate(&self, gpu: &Gpu) -> bool {
        let mut claimed = vec![false; gpu.queue_families.len()];

        for requirement in &self.queue_families {
            let found = gpu.queue_families.iter().enumerate().position(|(i, family)| {
                !claimed[i]
                    && family.kind.contains(requirement.kind)
                    && family.count >= requirement.count
            });

            match found {
                Some(i) => claimed[i] = true,
                None => return false,
            }
        }

        true
    }

    /// Every required extension name must appear verbatim.
    fn extension_gate(&self, gpu: &Gpu) -> bool {
        self.extensions
            .iter()
            .all(|name| gpu.extensions.contains(name))
    }

    /// Every limit comparison must hold.
    fn limit_gate(&self, gpu: &Gpu) -> bool {
        self.limits.iter().all(|requirement| {
            gpu.limits
                .get(requirement.kind)
                .satisfies(requirement.op, requirement.threshold)
        })
    }
}

impl Criteria<Gpu> for DeviceRequirements {
    fn matches(&self, candidate: &Gpu) -> bool {
        Self::matches(self, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::{GpuVendor, QueueFamily};
    use crate::limits::DeviceLimits;
    use lithos_core::filter;
    use std::collections::HashSet;

    fn test_gpu(name: &str, kind: DeviceKind, families: &[(QueueKind, u32)]) -> Gpu {
        Gpu {
            name: name.to_string(),
            vendor: GpuVendor::Other(0),
            kind,
            api_version: ash::vk::make_api_version(0, 1, 3, 0),
            driver_version: 1,
            features: DeviceFeatures::empty(),
            limits: DeviceLimits::default(),
            queue_families: families
                .iter()
                .enumerate()
                .map(|(index, &(kind, count))| QueueFamily {
                    kind,
                    count,
                    index: index as u32,
                })
                .collect(),
            extensions: HashSet::new(),
            native: None,
        }
    }

    fn graphics_gpu() -> Gpu {
        let mut gpu = test_gpu(
            "Test GPU",
            DeviceKind::DISCRETE,
            &[(QueueKind::GRAPHICS | QueueKind::TRANSFER, 4)],
        );
        gpu.features = DeviceFeatures::GEOMETRY_SHADER | DeviceFeatures::WIDE_LINES;
        gpu.limits.max_image_dimension_1d = 4096;
        gpu.extensions.insert("VK_KHR_swapchain".to_string());
        gpu
    }

    #[test]
    fn empty_requirements_match_everything() {
        let gpu = test_gpu("Any", DeviceKind::SOFTWARE, &[]);
        assert!(DeviceRequirements::new().matches(&gpu));
    }

    #[test]
    fn kind_gate_is_any_of() {
        let gpu = test_gpu("Integrated", DeviceKind::INTEGRATED, &[]);
        let requirements =
            DeviceRequirements::new().kind(DeviceKind::DISCRETE | DeviceKind::INTEGRATED);
        assert!(requirements.matches(&gpu));

        let requirements = DeviceRequirements::new().kind(DeviceKind::DISCRETE);
        assert!(!requirements.matches(&gpu));
    }

    #[test]
    fn feature_gate_needs_all_bits() {
        let gpu = graphics_gpu();
        assert!(DeviceRequirements::new()
            .features(DeviceFeatures::GEOMETRY_SHADER)
            .matches(&gpu));
        assert!(!DeviceRequirements::new()
            .features(DeviceFeatures::GEOMETRY_SHADER | DeviceFeatures::SPARSE_BINDING)
            .matches(&gpu));
    }

    #[test]
    fn queue_gate_respects_kind_and_count() {
        let gpu = graphics_gpu();
        assert!(DeviceRequirements::new()
            .queue_family(QueueKind::GRAPHICS, 4)
            .matches(&gpu));
        assert!(!DeviceRequirements::new()
            .queue_family(QueueKind::GRAPHICS, 5)
            .matches(&gpu));
        assert!(!DeviceRequirements::new()
            .queue_family(QueueKind::COMPUTE, 1)
            .matches(&gpu));
    }

    #[test]
    fn each_family_claimed_at_most_once() {
        // One graphics|transfer family cannot satisfy two independent
        // graphics requirements.
        let gpu = test_gpu(
            "Single family",
            DeviceKind::DISCRETE,
            &[(QueueKind::GRAPHICS | QueueKind::TRANSFER, 4)],
        );
        let requirements = DeviceRequirements::new()
            .queue_family(QueueKind::GRAPHICS, 1)
            .queue_family(QueueKind::GRAPHICS, 1);
        assert!(!requirements.matches(&gpu));
    }

    #[test]
    fn greedy_matching_is_order_dependent() {
        // The combined family is claimed by the first requirement, leaving
        // nothing for the second even though swapping the assignment would
        // work. This pins down the greedy, no-backtracking policy.
        let gpu = test_gpu(
            "Two families",
            DeviceKind::DISCRETE,
            &[
                (QueueKind::GRAPHICS | QueueKind::COMPUTE, 1),
                (QueueKind::GRAPHICS, 1),
            ],
        );
        let rejected = DeviceRequirements::new()
            .queue_family(QueueKind::GRAPHICS, 1)
            .queue_family(QueueKind::GRAPHICS | QueueKind::COMPUTE, 1);
        assert!(!rejected.matches(&gpu));

        // The same requirements in the other order succeed.
        let accepted = DeviceRequirements::new()
            .queue_family(QueueKind::GRAPHICS | QueueKind::COMPUTE, 1)
            .queue_family(QueueKind::GRAPHICS, 1);
        assert!(accepted.matches(&gpu));
    }

    #[test]
    fn extension_gate_empty_always_passes() {
        let bare = test_gpu("No extensions", DeviceKind::DISCRETE, &[]);
        assert!(DeviceRequirements::new().matches(&bare));
        assert!(DeviceRequirements::new().matches(&graphics_gpu()));
    }

    #[test]
    fn extension_gate_exact_match() {
        let gpu = graphics_gpu();
        assert!(DeviceRequirements::new()
            .extension("VK_KHR_swapchain")
            .matches(&gpu));
        assert!(!DeviceRequirements::new()
            .extension("VK_KHR_ray_tracing_pipeline")
            .matches(&gpu));
        // No prefix or case-insensitive matching.
        assert!(!DeviceRequirements::new()
            .extension("VK_KHR_swap")
            .matches(&gpu));
    }

    #[test]
    fn limit_gate_threshold_boundaries() {
        let requirements = DeviceRequirements::new().limit(
            LimitKind::MaxImageDimension1D,
            CompareOp::GreaterOrEqual,
            4096u32,
        );

        let mut gpu = graphics_gpu();
        assert!(requirements.matches(&gpu)); // reports exactly 4096

        gpu.limits.max_image_dimension_1d = 4097;
        assert!(requirements.matches(&gpu));

        gpu.limits.max_image_dimension_1d = 4095;
        assert!(!requirements.matches(&gpu));
    }

    #[test]
    fn gates_are_conjunctive() {
        // A device failing any single gate fails the whole match.
        let gpu = graphics_gpu();
        let passing = DeviceRequirements::new()
            .kind(DeviceKind::DISCRETE)
            .features(DeviceFeatures::GEOMETRY_SHADER)
            .queue_family(QueueKind::GRAPHICS, 1)
            .extension("VK_KHR_swapchain")
            .limit(LimitKind::MaxImageDimension1D, CompareOp::GreaterOrEqual, 4096u32);
        assert!(passing.matches(&gpu));

        assert!(!passing.clone().kind(DeviceKind::SOFTWARE).matches(&gpu));
        assert!(!passing.clone().features(DeviceFeatures::SHADER_FLOAT64).matches(&gpu));
        assert!(!passing.clone().queue_family(QueueKind::VIDEO_DECODE, 1).matches(&gpu));
        assert!(!passing.clone().extension("VK_EXT_mesh_shader").matches(&gpu));
        assert!(!passing
            .clone()
            .limit(LimitKind::MaxImageDimension1D, CompareOp::Greater, 4096u32)
            .matches(&gpu));
    }

    #[test]
    fn relaxing_a_requirement_never_shrinks_the_result() {
        let gpus = [
            graphics_gpu(),
            test_gpu("Weak", DeviceKind::INTEGRATED, &[(QueueKind::GRAPHICS, 1)]),
        ];

        let strict = DeviceRequirements::new()
            .kind(DeviceKind::DISCRETE)
            .queue_family(QueueKind::GRAPHICS, 2)
            .extension("VK_KHR_swapchain");
        let strict_count = filter(&gpus, &strict).len();

        // Widen the kind set.
        let relaxed = strict.clone().kind(DeviceKind::DISCRETE | DeviceKind::INTEGRATED);
        assert!(filter(&gpus, &relaxed).len() >= strict_count);

        // Lower the queue count.
        let mut relaxed = strict.clone();
        relaxed.queue_families[0].count = 1;
        assert!(filter(&gpus, &relaxed).len() >= strict_count);

        // Drop the extension requirement.
        let mut relaxed = strict.clone();
        relaxed.extensions.clear();
        assert!(filter(&gpus, &relaxed).len() >= strict_count);
    }

    #[test]
    fn selection_scenario_primary_with_video_decode() {
        let device_a = test_gpu(
            "A",
            DeviceKind::DISCRETE | DeviceKind::PRIMARY,
            &[
                (QueueKind::GRAPHICS | QueueKind::TRANSFER, 1),
                (QueueKind::VIDEO_DECODE, 1),
            ],
        );
        let device_b = test_gpu("B", DeviceKind::INTEGRATED, &[(QueueKind::GRAPHICS, 1)]);
        let gpus = [device_a, device_b];

        let requirements = DeviceRequirements::new()
            .kind(DeviceKind::PRIMARY)
            .queue_family(QueueKind::GRAPHICS | QueueKind::TRANSFER, 1)
            .queue_family(QueueKind::VIDEO_DECODE, 1);

        let selected = filter(&gpus, &requirements);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "A");
    }

    #[test]
    fn filter_preserves_enumeration_order() {
        let gpus = [
            test_gpu("First", DeviceKind::INTEGRATED, &[(QueueKind::GRAPHICS, 1)]),
            test_gpu("Second", DeviceKind::DISCRETE, &[(QueueKind::GRAPHICS, 1)]),
            test_gpu("Third", DeviceKind::DISCRETE, &[(QueueKind::GRAPHICS, 1)]),
        ];
        let requirements = DeviceRequirements::new().queue_family(QueueKind::GRAPHICS, 1);
        let selected = filter(&gpus, &requirements);
        let names: Vec<&str> = selected.iter().map(|gpu| gpu.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn empty_device_list_yields_empty_result() {
        let gpus: [Gpu; 0] = [];
        assert!(filter(&gpus, &DeviceRequirements::new()).is_empty());
    }
}
