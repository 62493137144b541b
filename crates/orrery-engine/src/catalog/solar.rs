//! Built-in solar system catalogue.
//!
//! Physical constants are SI: average orbit radius (m), orbit period (s),
//! mean body radius (m), sidereal rotation period (s). The Sun's radius is
//! deliberately shrunk from the true 6.957e8 m so the inner planets don't
//! render inside it at whole-system scale.

use crate::catalog::body::CelestialBody;

/// The Sun and everything orbiting it, moons included.
pub fn solar_system() -> CelestialBody {
    CelestialBody::new("Sol", 0.0, 0.0, 295.7e6, 2.074e6).with_children(vec![
        CelestialBody::new("Mercury", 5.78944e10, 7.6e6, 2_440_000.0, 5_067_000.0),
        CelestialBody::new("Venus", 1.0771e11, 19.4e6, 6.052e6, 10_087_200.0),
        CelestialBody::new("Earth", 1.496e11, 31_558_118.4, 6_371_393.0, 86_164.0905)
            .with_children(vec![CelestialBody::new(
                "Luna",
                385_000_000.0,
                2.333e6,
                1_736_482.0,
                2_360_448.0,
            )]),
        CelestialBody::new("Mars", 228e9, 59.4e6, 3_390_000.0, 88_800.0).with_children(vec![
            CelestialBody::new("Deimos", 2.346e7, 109_080.0, 6_600.0, 109_080.0),
            CelestialBody::new("Phobos", 9.376e6, 27_552.0, 11_266.7, 27_552.0),
        ]),
        CelestialBody::new("Jupiter", 778e9, 370e6, 69.911e6, 36_000.0).with_children(vec![
            CelestialBody::new("Ganymede", 1_070_400_000.0, 619_200.0, 2_634_100.0, 619_200.0),
            CelestialBody::new("Io", 421_648_128.0, 152_928.0, 1_821_294.6, 152_928.0),
            CelestialBody::new("Europa", 670_900_000.0, 306_806.0, 1_560_800.0, 306_806.0),
            CelestialBody::new("Callisto", 1_882_700_000.0, 1_441_929.0, 2_410_000.0, 1_441_929.0),
        ]),
        CelestialBody::new("Saturn", 1.433e12, 930e6, 58.232e6, 36_840.0).with_children(vec![
            CelestialBody::new("Mimas", 185_539_000.0, 81_388.0, 198_200.0, 81_388.0),
            CelestialBody::new("Enceladus", 237_948_000.0, 118_368.0, 252_100.0, 118_368.0),
            CelestialBody::new("Tethys", 294_619_000.0, 163_036.0, 531_100.0, 163_036.0),
            CelestialBody::new("Dione", 377_396_000.0, 236_390.0, 561_400.0, 236_390.0),
            CelestialBody::new("Rhea", 527_108_000.0, 390_355.0, 763_800.0, 390_355.0),
            CelestialBody::new("Titan", 1_221_870_000.0, 1_377_648.0, 2_575_500.0, 1_377_648.0),
        ]),
        CelestialBody::new("Uranus", 2.87e12, 2.7e9, 25.362e6, 62_040.0),
        CelestialBody::new("Neptune", 4.5029e12, 5.2e9, 24.622e6, 57_996.0),
        CelestialBody::new("Pluto", 8.13064e12, 7_820_908_000.0, 1.187e6, 552_096.0),
    ])
}
