//! Whole-system scenarios driven through the public API.

use std::f32::consts::PI;

use glam::Vec3;
use orrery_math::TWO_PI;
use orrery_render::{Framebuffer, OrbitCamera};
use orrery_shade::{Rgb565, ShaderKind};
use orrery_space::{BodyKind, CelestialBody, MAX_BODIES, ScenePreset, SolarSystem};

fn sun() -> CelestialBody {
    CelestialBody::new("Sun", BodyKind::Sun)
        .with_visuals(20.0, Rgb565(0xFFE0))
        .with_shader(None)
}

fn orbiting(name: &str, radius: f32, speed: f32) -> CelestialBody {
    CelestialBody::new(name, BodyKind::Planet)
        .with_visuals(5.0, Rgb565::BLUE)
        .with_orbit(radius, speed, 0.0)
}

#[test]
fn two_body_half_orbit() {
    let mut system = SolarSystem::empty();
    system.add_body(sun());
    system.add_body(orbiting("P", 50.0, 1.0));

    system.update(PI);

    let planet = system.get_body_by_name("P").unwrap();
    assert!((planet.orbit_angle - PI).abs() < 1e-4, "{}", planet.orbit_angle);
    assert!((planet.position - Vec3::new(-50.0, 0.0, 0.0)).length() < 1e-3);
    assert_eq!(system.get_body_by_name("Sun").unwrap().position, Vec3::ZERO);
}

#[test]
fn time_scale_scales_motion_and_clock() {
    let mut system = SolarSystem::empty();
    system.time_scale = 0.5;
    system.add_body(orbiting("P", 10.0, 1.0));
    system.update(2.0);
    assert!((system.total_time() - 1.0).abs() < 1e-6);
    assert!((system.get_body_by_index(0).unwrap().orbit_angle - 1.0).abs() < 1e-6);
}

#[test]
fn capacity_is_fifteen() {
    let mut system = SolarSystem::empty();
    let mut accepted = 0;
    for i in 0..16 {
        if system.add_body(orbiting(&format!("B{i}"), 10.0 + i as f32, 0.1)).is_some() {
            accepted += 1;
        }
    }
    assert_eq!(accepted, MAX_BODIES);
    assert_eq!(system.len(), 15);
    assert!(system.get_body_by_name("B15").is_none());
}

#[test]
fn draw_order_is_far_to_near() {
    let camera = OrbitCamera::default();
    let mut system = SolarSystem::empty();
    for (i, radius) in [30.0, 140.0, 70.0, 10.0, 100.0].into_iter().enumerate() {
        system.add_body(orbiting(&format!("B{i}"), radius, 0.3 * (i as f32 + 1.0)));
    }
    for _ in 0..20 {
        system.update(0.37);
        system.sort_by_distance(&camera);
        let distances: Vec<f32> = system.draw_order().map(|b| b.distance_to_camera).collect();
        assert_eq!(distances.len(), system.len());
        assert!(distances.windows(2).all(|w| w[0] >= w[1]), "{distances:?}");
    }
}

#[test]
fn equal_distances_keep_insertion_order() {
    let camera = OrbitCamera::default();
    let mut system = SolarSystem::empty();
    for name in ["A", "B", "C"] {
        system.add_body(CelestialBody::new(name, BodyKind::Planet));
    }
    system.sort_by_distance(&camera);
    let names: Vec<&str> = system.draw_order().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
    // Insertion order itself is untouched by sorting.
    let inserted: Vec<&str> = system.bodies().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(inserted, ["A", "B", "C"]);
}

#[test]
fn angles_stay_wrapped() {
    let mut system = SolarSystem::with_preset(ScenePreset::Orrery);
    for _ in 0..2000 {
        system.update(0.1);
    }
    for body in system.bodies() {
        assert!((0.0..TWO_PI).contains(&body.orbit_angle), "{}", body.name);
        assert!((0.0..TWO_PI).contains(&body.rotation_angle), "{}", body.name);
    }
}

#[test]
fn fixed_body_never_moves() {
    let mut system = SolarSystem::empty();
    let anchor = Vec3::new(12.0, -4.0, 7.5);
    system.add_body(sun().with_position(anchor).with_orbit(0.0, 3.0, 0.2));
    for _ in 0..100 {
        system.update(0.05);
    }
    assert_eq!(system.get_body_by_index(0).unwrap().position, anchor);
}

#[test]
fn set_planet_shader_changes_first_body_only() {
    let mut system = SolarSystem::empty();
    system.add_body(orbiting("First", 10.0, 1.0).with_shader(Some(ShaderKind::Mercury)));
    system.add_body(orbiting("Second", 20.0, 1.0).with_shader(Some(ShaderKind::Earth)));
    system.add_body(sun());

    system.set_planet_shader(ShaderKind::Saturn);

    let shaders: Vec<_> = system.bodies().iter().map(|b| b.shader).collect();
    assert_eq!(
        shaders,
        [Some(ShaderKind::Saturn), Some(ShaderKind::Earth), None]
    );
}

#[test]
fn set_planet_shader_on_empty_system() {
    let mut system = SolarSystem::empty();
    system.set_planet_shader(ShaderKind::Neptune);
    assert!(system.is_empty());
}

#[test]
fn lookups_return_none_when_missing() {
    let system = SolarSystem::new();
    assert!(system.get_body_by_name("Pluto").is_none());
    assert!(system.get_body_by_index(1).is_none());
    assert!(system.get_body_by_index(0).is_some());
}

#[test]
fn self_parent_set_through_mut_accessor_is_detached() {
    let mut system = SolarSystem::empty();
    let id = system.add_body(orbiting("P", 10.0, 1.0)).unwrap();
    *system.get_body_by_index_mut(0).unwrap() = orbiting("P", 10.0, 1.0).with_parent(id);

    for _ in 0..5 {
        system.update(0.1);
    }

    let body = system.get_body_by_index(0).unwrap();
    assert!(body.parent().is_none());
    assert!((body.position.length() - 10.0).abs() < 1e-3);
}

#[test]
fn parent_from_another_system_is_detached() {
    let mut other = SolarSystem::empty();
    let mut foreign = None;
    for i in 0..5 {
        foreign = other.add_body(orbiting(&format!("B{i}"), 10.0, 1.0));
    }
    let foreign = foreign.unwrap();

    let mut system = SolarSystem::empty();
    system.add_body(orbiting("P", 10.0, 1.0));
    *system.get_body_by_name_mut("P").unwrap() = orbiting("P", 10.0, 1.0).with_parent(foreign);

    system.update(0.1);

    let body = system.get_body_by_index(0).unwrap();
    assert!(body.parent().is_none());
    assert!((body.position.length() - 10.0).abs() < 1e-3);
}

#[test]
fn nearer_body_paints_over_farther() {
    let camera = OrbitCamera::default();
    let eye = camera.position();
    let mut system = SolarSystem::empty();
    // Both sit on the line of sight to the origin; the near one is added first.
    system.add_body(
        CelestialBody::new("Near", BodyKind::Planet)
            .with_visuals(5.0, Rgb565::RED)
            .with_position(eye * 0.5)
            .with_shader(None),
    );
    system.add_body(
        CelestialBody::new("Far", BodyKind::Planet)
            .with_visuals(10.0, Rgb565::GREEN)
            .with_shader(None),
    );

    let mut fb = Framebuffer::new(320, 240);
    system.render_with_shaders(&camera, 0.0, &mut fb);

    let near = system.get_body_by_name("Near").unwrap().screen;
    assert_eq!(fb.pixel(near.x, near.y), Some(Rgb565::RED));
    assert!(fb.count_color(Rgb565::GREEN) > 0);
}
