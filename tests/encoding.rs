use ark_bn254::Fr;
use circom_encoding::{
    array32_to_field, field_to_array32, flat_array, fnv, fnv_hash, from_array32, to_array32,
    witness::read_shared_memory_words, BigUint, EncoderConfig, EncodingError, InputEncoder,
    Nested,
};
use color_eyre::Result;
use std::str::FromStr;

#[test]
#[cfg(feature = "bn254")]
fn multiplier_inputs() -> Result<()> {
    let enc = InputEncoder::new(EncoderConfig::default());
    let signals = enc.encode_str(r#"{"a": 3, "b": "11"}"#)?;

    assert_eq!(signals.len(), 2);
    for (sig, expected) in signals.iter().zip([3u64, 11].iter()) {
        assert_eq!(fnv(&sig.name), (sig.hash_msb, sig.hash_lsb));
        assert_eq!(sig.values.len(), 1);
        assert_eq!(sig.values[0].len(), 8);
        assert_eq!(from_array32(&sig.values[0]), BigUint::from(*expected));
    }

    Ok(())
}

#[test]
#[cfg(feature = "bn254")]
fn negative_inputs_wrap_into_the_field() -> Result<()> {
    let enc = InputEncoder::new(EncoderConfig::default());
    let signals = enc.encode_str(r#"{"in": [[-1, "-2"], [0]]}"#)?;
    let sig = &signals[0];

    assert_eq!(sig.values.len(), 3);
    assert_eq!(array32_to_field::<Fr>(&sig.values[0]), -Fr::from(1u64));
    assert_eq!(array32_to_field::<Fr>(&sig.values[1]), -Fr::from(2u64));
    assert_eq!(sig.values[2], vec![0; 8]);

    let words = sig.shared_memory_words(1).unwrap().collect::<Vec<_>>();
    assert_eq!(
        read_shared_memory_words(&words),
        BigUint::from_str(
            "21888242871839275222246405745257275088548364400416034343698204186575808495615"
        )
        .unwrap()
    );

    Ok(())
}

#[test]
fn witness_values_round_trip_through_limbs() -> Result<()> {
    let witness = [
        "1",
        "21888242871839275222246405745257275088548364400416034343698204186575672693159",
        "21888242871839275222246405745257275088548364400416034343698204186575796149939",
        "11",
    ];
    for w in witness.iter() {
        let limbs = to_array32(*w, Some(8))?;
        assert_eq!(limbs.len(), 8);
        assert_eq!(from_array32(&limbs), BigUint::from_str(w).unwrap());

        let fr = Fr::from_str(w).map_err(|_| color_eyre::eyre::eyre!("bad field element"))?;
        assert_eq!(field_to_array32(&fr, Some(8)), limbs);
    }

    Ok(())
}

#[test]
fn flatten_then_encode() -> Result<()> {
    let nested = Nested::seq(vec![
        Nested::leaf(1u64),
        Nested::seq(vec![Nested::leaf(1u64 << 32), Nested::seq(vec![])]),
        Nested::seq(vec![Nested::seq(vec![Nested::leaf(5u64)])]),
    ]);
    let limbs = flat_array(&nested)
        .iter()
        .map(|v| to_array32(v, Some(2)))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    assert_eq!(limbs, vec![vec![0, 1], vec![1, 0], vec![0, 5]]);
    Ok(())
}

#[test]
fn artifact_fingerprints() {
    assert_eq!(fnv_hash(""), "cbf29ce484222325");
    assert_eq!(fnv_hash("foobar"), "85944171f73967e8");
    assert_ne!(fnv_hash("main.wasm"), fnv_hash("main.wat"));
}

#[test]
#[cfg(feature = "bn254")]
fn errors_carry_context() {
    let enc = InputEncoder::new(EncoderConfig::default());
    let err = enc.encode_str(r#"{"a": {"b": 1}}"#).unwrap_err();
    assert_eq!(err.to_string(), "invalid input: signal a: object is not a number");

    let err = to_array32("-3", None).unwrap_err();
    assert!(matches!(err, EncodingError::InvalidInput(_)));
}
