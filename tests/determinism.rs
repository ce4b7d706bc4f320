use std::collections::HashSet;
use std::sync::Arc;

use blake3::hash;
use solomon::{GaloisField, GeneratorBuilder, Polynomial};

#[test]
fn parity_generation_is_deterministic() {
    let mut fingerprints = HashSet::new();

    for _ in 0..5 {
        let field = GaloisField::new(0x11D, 256, 2).expect("field constructs");
        let builder = GeneratorBuilder::new(Arc::clone(&field));
        let message = Polynomial::new((1..=16u16).map(|v| field.element(v)).collect())
            .expect("message is non-empty");

        let parity = builder.parity(&message, 10).expect("parity succeeds");
        let bytes: Vec<u8> = parity.iter().map(|e| e.value() as u8).collect();
        fingerprints.insert(hash(&bytes));
    }

    assert_eq!(fingerprints.len(), 1, "outputs diverged across runs");
}
