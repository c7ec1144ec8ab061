/// Shorthand for creating a big integer in tests.
///
/// Limbs are listed least significant first. Without arguments, creates zero.
#[macro_export]
macro_rules! BN {
    () => {
        $crate::Bignum::zero()
    };
    ($($limb:expr),+ $(,)?) => {{
        let limbs: &[$crate::Limb] = &[$($limb),+];
        $crate::Bignum::from_limbs(limbs).unwrap()
    }};
}
