use crate::catalog::{Metal, Topology, BASE_SHEATH_WEIGHT_KG_M};

const MM2_TO_M2: f64 = 1e-6;

/// Mass of conductor metal in one meter of cable, all phases together (kg/m).
pub fn conductor_weight_per_meter(cross_section_mm2: f64, metal: Metal, phase_count: u32) -> f64 {
    cross_section_mm2 * MM2_TO_M2 * metal.density_kg_m3() * f64::from(phase_count)
}

/// The screen is copper regardless of the conductor metal.
pub fn screen_weight_per_meter(screen_mm2: f64, phase_count: u32) -> f64 {
    if screen_mm2 == 0.0 {
        return 0.0;
    }
    conductor_weight_per_meter(screen_mm2, Metal::Copper, phase_count)
}

/// Nominal sheath mass; not derived from the cable geometry.
pub fn base_sheath_weight_per_meter(topology: Topology) -> f64 {
    BASE_SHEATH_WEIGHT_KG_M * topology.sheath_factor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aluminum_is_lighter_than_copper_for_the_same_section() {
        let cu = conductor_weight_per_meter(150.0, Metal::Copper, 3);
        let al = conductor_weight_per_meter(150.0, Metal::Aluminum, 3);
        assert!((cu - 150.0e-6 * 8890.0 * 3.0).abs() < 1e-12);
        assert!((al - 150.0e-6 * 2703.0 * 3.0).abs() < 1e-12);
    }

    #[test]
    fn three_core_sheath_is_five_percent_heavier() {
        assert!((base_sheath_weight_per_meter(Topology::SingleCore) - 0.12).abs() < 1e-12);
        assert!((base_sheath_weight_per_meter(Topology::ThreeCore) - 0.126).abs() < 1e-12);
    }

    #[test]
    fn no_screen_weighs_nothing() {
        assert_eq!(screen_weight_per_meter(0.0, 3), 0.0);
    }
}
