use rand::{rngs::StdRng, SeedableRng};
use serde_json::{json, Value};
use shared::{domain::SteeringParameters, error::TransportError, protocol::SteerPayload};

use crate::{
    build_payload,
    channel::{ChannelEvent, ChannelState, SteerTransport},
    preview_frame, Dispatcher, ParameterStore,
};

/// Transport fake that records every frame handed to it and optionally
/// fails each send with a fixed error.
struct RecordingTransport {
    state: ChannelState,
    frames: Vec<String>,
    fail_with: Option<TransportError>,
}

impl RecordingTransport {
    fn open() -> Self {
        Self {
            state: ChannelState::Open,
            frames: Vec::new(),
            fail_with: None,
        }
    }

    fn failing(err: TransportError) -> Self {
        let mut transport = Self::open();
        transport.fail_with = Some(err);
        transport
    }
}

impl SteerTransport for RecordingTransport {
    fn state(&self) -> ChannelState {
        self.state
    }

    fn send(&mut self, frame: &str) -> Result<(), TransportError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.frames.push(frame.to_string());
        Ok(())
    }

    fn close(&mut self) {
        self.state = ChannelState::Closed;
    }

    fn poll_event(&mut self) -> Option<ChannelEvent> {
        None
    }
}

#[test]
fn setters_clamp_out_of_domain_values_to_boundaries() {
    let mut store = ParameterStore::new();

    store.set_brightness(5.0);
    assert_eq!(store.snapshot().brightness, 1.7);
    store.set_brightness(-2.0);
    assert_eq!(store.snapshot().brightness, 0.3);

    store.set_contrast(0.0);
    assert_eq!(store.snapshot().contrast, 0.5);
    store.set_saturation(99.0);
    assert_eq!(store.snapshot().saturation, 2.5);
    store.set_camera_angle_deg(-180.0);
    assert_eq!(store.snapshot().camera_angle_deg, -45.0);
    store.set_style_intensity(1.5);
    assert_eq!(store.snapshot().style_intensity, 1.0);
    store.set_latent_morph(-3.0);
    assert_eq!(store.snapshot().latent_morph, -1.0);
}

#[test]
fn setters_store_in_domain_values_unchanged() {
    let mut store = ParameterStore::new();
    store.set_brightness(1.25);
    store.set_camera_angle_deg(-12.0);
    assert_eq!(store.snapshot().brightness, 1.25);
    assert_eq!(store.snapshot().camera_angle_deg, -12.0);
}

#[test]
fn nan_writes_fall_back_to_the_field_default() {
    let mut store = ParameterStore::new();
    store.set_contrast(f64::NAN);
    assert_eq!(store.snapshot().contrast, 1.0);
}

#[test]
fn reset_restores_the_exact_default_tuple() {
    let mut store = ParameterStore::new();
    store.set_brightness(0.3);
    store.set_contrast(2.0);
    store.set_camera_angle_deg(45.0);
    store.reset();

    assert_eq!(
        store.snapshot(),
        SteeringParameters {
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            camera_angle_deg: 0.0,
            style_intensity: 0.7,
            latent_morph: 0.0,
        }
    );
}

#[test]
fn randomize_stays_in_domain_and_rounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut store = ParameterStore::new();

    for _ in 0..200 {
        store.randomize(&mut rng);
        let params = store.snapshot();
        assert!(params.in_domain(), "out of domain: {params:?}");
        // Whole degrees for the camera, two decimals elsewhere.
        assert_eq!(params.camera_angle_deg.fract(), 0.0);
        for value in [
            params.brightness,
            params.contrast,
            params.saturation,
            params.style_intensity,
            params.latent_morph,
        ] {
            assert!(((value * 100.0).round() - value * 100.0).abs() < 1e-9);
        }
    }
}

#[test]
fn payload_carries_all_wire_keys_and_the_steer_op() {
    let payload = build_payload(&SteeringParameters::default(), 1_700_000_000_000);
    let value: Value = serde_json::from_str(&payload.to_wire()).unwrap();

    assert_eq!(value["t"], json!(1_700_000_000_000i64));
    assert_eq!(value["op"], json!("steer"));
    let params = value["params"].as_object().unwrap();
    for key in [
        "brightness",
        "contrast",
        "saturation",
        "camera_angle_deg",
        "style_intensity",
        "latent_morph",
    ] {
        assert!(params.contains_key(key), "missing wire key {key}");
    }
}

#[test]
fn extreme_scenario_serializes_field_exact_and_auto_sends_once() {
    let mut store = ParameterStore::new();
    store.set_brightness(0.3);
    store.set_contrast(2.0);
    store.set_saturation(0.0);
    store.set_camera_angle_deg(-45.0);
    store.set_style_intensity(1.0);
    store.set_latent_morph(-1.0);

    let mut transport = RecordingTransport::open();
    let mut dispatcher = Dispatcher::new(true);
    let payload = build_payload(&store.snapshot(), 42);
    assert!(dispatcher.payload_changed(&mut transport, &payload).unwrap());

    assert_eq!(transport.frames.len(), 1);
    let sent: Value = serde_json::from_str(&transport.frames[0]).unwrap();
    assert_eq!(
        sent["params"],
        json!({
            "brightness": 0.3,
            "contrast": 2.0,
            "saturation": 0.0,
            "camera_angle_deg": -45.0,
            "style_intensity": 1.0,
            "latent_morph": -1.0,
        })
    );
}

#[test]
fn auto_send_forwards_every_change_with_post_mutation_state() {
    let mut store = ParameterStore::new();
    let mut transport = RecordingTransport::open();
    let mut dispatcher = Dispatcher::new(true);

    for (step, brightness) in [0.5, 0.9, 5.0].into_iter().enumerate() {
        store.set_brightness(brightness);
        let payload = build_payload(&store.snapshot(), step as i64);
        dispatcher.payload_changed(&mut transport, &payload).unwrap();
    }

    assert_eq!(transport.frames.len(), 3);
    let last: Value = serde_json::from_str(&transport.frames[2]).unwrap();
    // 5.0 clamps to the brightness max before the payload is built.
    assert_eq!(last["params"]["brightness"], json!(1.7));
}

#[test]
fn manual_mode_sends_nothing_until_the_explicit_action() {
    let mut store = ParameterStore::new();
    let mut transport = RecordingTransport::open();
    let mut dispatcher = Dispatcher::new(false);

    store.set_saturation(2.0);
    let built = build_payload(&store.snapshot(), 1);
    assert!(!dispatcher.payload_changed(&mut transport, &built).unwrap());
    assert!(transport.frames.is_empty());
    assert!(dispatcher.last_sent().is_none());

    // A later mutation, then send-now: the action uses the state current at
    // that moment.
    store.set_saturation(0.25);
    let current = build_payload(&store.snapshot(), 2);
    dispatcher.send_now(&mut transport, &current).unwrap();

    assert_eq!(transport.frames.len(), 1);
    let sent: Value = serde_json::from_str(&transport.frames[0]).unwrap();
    assert_eq!(sent["params"]["saturation"], json!(0.25));
    assert_eq!(dispatcher.last_sent(), Some(&current));
}

#[test]
fn last_sent_tracks_the_transport_not_the_builder() {
    let mut transport = RecordingTransport::open();
    let mut dispatcher = Dispatcher::new(true);

    let first = build_payload(&SteeringParameters::default(), 10);
    dispatcher.payload_changed(&mut transport, &first).unwrap();

    dispatcher.set_auto_send(false);
    let second = build_payload(&SteeringParameters::default(), 20);
    dispatcher.payload_changed(&mut transport, &second).unwrap();

    assert_eq!(dispatcher.last_sent(), Some(&first));
}

#[test]
fn transport_error_drops_the_payload_and_keeps_last_sent() {
    let mut transport =
        RecordingTransport::failing(TransportError::SendRejected("queue full".to_string()));
    let mut dispatcher = Dispatcher::new(true);

    let payload = build_payload(&SteeringParameters::default(), 5);
    let err = dispatcher
        .payload_changed(&mut transport, &payload)
        .unwrap_err();
    assert_eq!(err, TransportError::SendRejected("queue full".to_string()));
    assert!(dispatcher.last_sent().is_none());
}

#[test]
fn preview_is_deterministic_and_monotonic_per_input() {
    let mut params = SteeringParameters::default();
    let base = preview_frame(&params);
    assert_eq!(base, preview_frame(&params));
    assert_eq!(base.rotation_deg, 0.0);

    params.brightness = 1.6;
    let brighter = preview_frame(&params);
    assert!(brighter.brightness_factor > base.brightness_factor);

    params.camera_angle_deg = -30.0;
    assert_eq!(preview_frame(&params).rotation_deg, -30.0);
}

#[test]
fn wire_payload_round_trips_through_serde() {
    let payload = build_payload(&SteeringParameters::default(), 123);
    let parsed: SteerPayload = serde_json::from_str(&payload.to_wire()).unwrap();
    assert_eq!(parsed, payload);
}
