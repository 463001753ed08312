// tests/rotor_tests.rs
use enigma_engine::{EnigmaError, Rotor, RotorId};

#[test]
fn test_forward_applies_wiring_relative_to_position() {
    let mut rotor = Rotor::from_id(RotorId::I, 0).unwrap();
    // rotor I maps A to E at rest
    assert_eq!(rotor.forward(0), 4);
    rotor.step();
    assert_eq!(rotor.forward(0), 9); // K, shifted back by one
    rotor.step();
    assert_eq!(rotor.forward(0), 10); // M, shifted back by two
}

#[test]
fn test_backward_is_inverse_of_forward() {
    let mut rotor = Rotor::from_id(RotorId::I, 0).unwrap();
    assert_eq!(rotor.backward(4), 0); // E came from A
    assert_eq!(rotor.backward(11), 4); // L came from E
    rotor.step();
    assert_eq!(rotor.backward(4), 2);
    assert_eq!(rotor.backward(5), 4);
}

#[test]
fn test_forward_backward_roundtrip_all_catalog_rotors() {
    for id in RotorId::ALL {
        for position in 0..26 {
            let rotor = Rotor::from_id(id, position).unwrap();
            for index in 0..26 {
                assert_eq!(
                    rotor.backward(rotor.forward(index)),
                    index,
                    "{id} at position {position}, index {index}"
                );
            }
        }
    }
}

#[test]
fn test_step_wraps_and_reports_notch() {
    let mut rotor = Rotor::from_id(RotorId::I, 0).unwrap();
    // notch of rotor I sits at Q
    assert_eq!(rotor.notch(), RotorId::I.notch_index());
    rotor.set_position(RotorId::I.notch_index() - 1);
    assert!(!rotor.at_notch());
    assert!(rotor.step());
    assert!(rotor.at_notch());
    assert!(!rotor.step());

    rotor.set_position(25);
    rotor.step();
    assert_eq!(rotor.position(), 0);
}

#[test]
fn test_set_position_is_modular() {
    let mut rotor = Rotor::from_id(RotorId::III, 0).unwrap();
    rotor.set_position(29);
    assert_eq!(rotor.position(), 3);
}

#[test]
fn test_new_rejects_non_bijective_wiring() {
    let result = Rotor::new([0u8; 26], 0, 0);
    assert!(matches!(result, Err(EnigmaError::WiringNotBijective)));
}

#[test]
fn test_catalog_wirings_all_construct() {
    for id in RotorId::ALL {
        assert!(Rotor::from_id(id, 0).is_ok(), "{id} failed to build");
    }
}
