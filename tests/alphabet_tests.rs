// tests/alphabet_tests.rs
use enigma_engine::alphabet::{index_of, invert, is_bijection, letter_at, parse_wiring};
use enigma_engine::{EnigmaError, Rotor};

#[test]
fn test_index_of_is_case_insensitive() {
    assert_eq!(index_of('A'), Some(0));
    assert_eq!(index_of('z'), Some(25));
    assert_eq!(index_of('M'), Some(12));
    assert_eq!(index_of('3'), None);
    assert_eq!(index_of(' '), None);
    assert_eq!(index_of('é'), None);
}

#[test]
fn test_letter_at_wraps() {
    assert_eq!(letter_at(0), 'A');
    assert_eq!(letter_at(25), 'Z');
    assert_eq!(letter_at(26), 'A');
}

#[test]
fn test_parse_wiring_accepts_a_permutation() {
    let table = parse_wiring("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
    assert_eq!(table[0], 4);
    assert!(is_bijection(&table));

    let inverse = invert(&table);
    for index in 0..26u8 {
        assert_eq!(inverse[table[index as usize] as usize], index);
    }
}

#[test]
fn test_parse_wiring_rejects_bad_input() {
    // repeated letter
    assert!(matches!(
        parse_wiring("EKMFLGDQVZNTOWYHXUSPAIBRCC"),
        Err(EnigmaError::WiringNotBijective)
    ));
    // too short
    assert!(matches!(
        parse_wiring("ABC"),
        Err(EnigmaError::WiringNotBijective)
    ));
    // too long
    assert!(matches!(
        parse_wiring("EKMFLGDQVZNTOWYHXUSPAIBRCJA"),
        Err(EnigmaError::WiringNotBijective)
    ));
    // non-letter
    assert!(matches!(
        parse_wiring("EKMFLGDQVZNTOWYHXUSPAIBRC!"),
        Err(EnigmaError::InvalidSymbol('!'))
    ));
}

#[test]
fn test_custom_wiring_builds_a_rotor() {
    // a rotor need not come from the catalog as long as the wiring is
    // a permutation
    let table = parse_wiring("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();
    let rotor = Rotor::new(table, 0, 0).unwrap();
    for index in 0..26 {
        assert_eq!(rotor.backward(rotor.forward(index)), index);
    }
}
