//! This module contains the edwards448 curve configuration used by Ed448
//! signatures ([RFC 8032], section 5.2).
//!
//! Unlike edwards25519, this curve is untwisted (`a = 1`) and its field
//! prime `2^448 - 2^224 - 1` fills all seven limbs, which is why the
//! Montgomery multiplier carries explicit spill limbs.
//!
//! [RFC 8032]: https://www.rfc-editor.org/rfc/rfc8032

use crate::{
    arithmetic::uint::{U448, U960},
    curve::{
        te::{Affine, TECurveConfig},
        CurveConfig,
    },
    field::{
        fp::{Fp448, Fp960, FpParams, LIMBS_448, LIMBS_960},
        Field,
    },
    fp_from_num, from_hex, from_num,
};

const G_GENERATOR_X: Fq = fp_from_num!("224580040295924300187604334099896036246789641632564134246125461686950415467406032909029192869357953282578032075146446173674602635247710");
const G_GENERATOR_Y: Fq = fp_from_num!("298819210078481492676017930443930673437544040154080242095928241372331506189835876003536878655418784733982303233503462500531545062832660");

/// Base field for [`Ed448Config`], `2^448 - 2^224 - 1`.
pub type Fq = Fp448<Ed448FqParam>;
/// Base field parameters for [`Ed448Config`].
pub struct Ed448FqParam;

impl FpParams<LIMBS_448> for Ed448FqParam {
    const MODULUS: U448 = from_hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffffffffffffffffffffffffffffffffffffffffffffffffffff");
}

/// Scalar field for [`Ed448Config`], the prime subgroup order
/// `2^446 - 13818066809895115352007386748515426880336692474882178609894547503885`.
pub type Fr = Fp448<Ed448FrParam>;
/// Scalar field parameters for [`Ed448Config`].
pub struct Ed448FrParam;

impl FpParams<LIMBS_448> for Ed448FrParam {
    const MODULUS: U448 = from_num!("181709681073901722637330951972001133588410340171829515070372549795146003961539585716195755291692375963310293709091662304773755859649779");
}

/// The scalar field widened to 960 bits, able to reduce a full 114-byte
/// SHAKE256 output in one pass.
pub type FrWide = Fp960<Ed448FrWideParam>;
/// Parameters of the widened scalar field.
pub struct Ed448FrWideParam;

impl FpParams<LIMBS_960> for Ed448FrWideParam {
    const MODULUS: U960 = Ed448FrParam::MODULUS.widen();
}

/// edwards448 curve details.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Ed448Config;

impl CurveConfig for Ed448Config {
    type BaseField = Fq;
    type ScalarField = Fr;

    const COFACTOR: u64 = 4;
    const COFACTOR_LOG2: u32 = 2;
}

impl TECurveConfig for Ed448Config {
    const COEFF_A: Self::BaseField = fp_from_num!("1");
    const COEFF_D: Self::BaseField = fp_from_num!("39081").ct_neg();
    const GENERATOR: Affine<Self> =
        Affine::new_unchecked(G_GENERATOR_X, G_GENERATOR_Y);

    // 5 blocks of 5 teeth every 18 bits cover 450 bits, two more than the
    // order needs.
    const COMB_BLOCKS: usize = 5;
    const COMB_TEETH: usize = 5;
    const COMB_SPACING: usize = 18;

    const WNAF_WIDTH_BASE: usize = 5;
    const SPLIT_SHIFT: usize = 225;

    #[inline(always)]
    fn mul_by_a(elem: Self::BaseField) -> Self::BaseField {
        elem
    }

    fn sqrt(elem: &Self::BaseField) -> Option<Self::BaseField> {
        // p = 3 (mod 4), so a^((p + 1) / 4) is a root whenever one exists.
        let modulus = Ed448FqParam::MODULUS;
        let candidate =
            elem.pow(modulus.ct_wrapping_add(&U448::from_u8(1)) >> 2);
        (candidate.square() == *elem).then_some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use proptest::prelude::*;

    use super::*;
    use crate::{arithmetic::BigInteger, curve::te::Extended};

    #[test]
    fn modulus_constants_line_up() {
        let p = BigUint::from_bytes_le(
            &Ed448FqParam::MODULUS.into_bytes_le(),
        );
        let expected =
            (BigUint::from(1u8) << 448) - (BigUint::from(1u8) << 224) - 1u8;
        assert_eq!(p, expected);

        let l = BigUint::from_bytes_le(
            &Ed448FrParam::MODULUS.into_bytes_le(),
        );
        let c = BigUint::parse_bytes(
            b"13818066809895115352007386748515426880336692474882178609894547503885",
            10,
        )
        .unwrap();
        assert_eq!(l, (BigUint::from(1u8) << 446) - c);
    }

    #[test]
    fn generator_is_on_curve_and_in_subgroup() {
        let g = Ed448Config::GENERATOR;
        assert!(g.is_on_curve());

        let g_ext = Extended::from(g);
        assert!(g_ext.mul_bigint(Ed448FrParam::MODULUS).is_zero());
    }

    #[test]
    fn doubling_matches_addition() {
        let g = Extended::from(Ed448Config::GENERATOR);
        assert_eq!(g + g, g.double());
        assert_eq!(g + g + g, g.mul_bigint(3u8));
        assert!((g - g).is_zero());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn sqrt_round_trips(bytes: [u8; 56]) {
            let a = Fq::new(U448::ct_from_le_slice(&bytes));
            let square = a.square();
            let root =
                Ed448Config::sqrt(&square).expect("squares have roots");
            prop_assert!(root == a || root == -a);
        }
    }
}
