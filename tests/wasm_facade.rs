#![cfg(target_arch = "wasm32")]

use sandgarden_engine::World;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn bad_config_is_a_js_error() {
    assert!(World::from_config_json(r#"{"rows": 0, "cols": 3}"#).is_err());
    assert!(World::from_config_json("{").is_err());
}

#[wasm_bindgen_test]
fn constructor_rejects_bad_sizes() {
    assert!(World::new(0, 4).is_err());
    assert!(World::new(3_000_000_000, 1).is_err());
    assert!(World::new(2, 2).is_ok());
}

#[wasm_bindgen_test]
fn config_round_trips_through_js_api() {
    let world = World::from_config_json(r#"{"rows": 5, "cols": 6, "seed": 3}"#).unwrap();
    assert_eq!(world.rows(), 5);
    assert_eq!(world.cols(), 6);
    let json = world.config_json().unwrap();
    assert!(json.contains("\"rows\":5"));
}

#[wasm_bindgen_test]
fn manifest_lists_six_particles() {
    let world = World::new(1, 1).unwrap();
    let json = world.particle_manifest_json().unwrap();
    assert!(json.contains("\"name\":\"Cloud\""));
    assert!(json.contains("\"type\":\"grass\""));
}
