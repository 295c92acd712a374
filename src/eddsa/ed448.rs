//! The Ed448 signature engine ([RFC 8032], section 5.2): SHAKE256 over
//! edwards448, with 57-byte keys and 114-byte signatures.
//!
//! [RFC 8032]: https://www.rfc-editor.org/rfc/rfc8032

use std::sync::OnceLock;

use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    arithmetic::{uint::U448, BigInteger},
    curve::te::{
        instance::ed448::{
            Ed448Config, Ed448FrParam, Ed448FrWideParam, Fq, Fr,
        },
        Affine, Extended,
    },
    eddsa::{has_small_order, recover_x, Error},
    field::{
        fp::{FpParams, LIMBS_448, LIMBS_896, LIMBS_960},
        PrimeField,
    },
    scalar::{reduce_wide, SecretScalar},
    scalar_mul::{
        comb::mul_base,
        tables::PrecomputedTables,
        vartime::{mul_vartime, verify_combination_vartime},
    },
};

/// The length of an Ed448 secret key, in bytes.
pub const SECRET_KEY_LENGTH: usize = 57;
/// The length of an Ed448 public key, in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 57;
/// The length of an Ed448 signature, in bytes.
pub const SIGNATURE_LENGTH: usize = 114;

/// Ed448 secret key: 57 octets of cryptographically secure random data,
/// per [RFC 8032, section 5.2.5].
///
/// [RFC 8032, section 5.2.5]: https://www.rfc-editor.org/rfc/rfc8032#section-5.2.5
pub type SecretKey = [u8; SECRET_KEY_LENGTH];

/// Domain separator written before every hash input. Unlike Ed25519,
/// Ed448 domain-separates the pure flavor as well.
const DOM4_PREFIX: &[u8] = b"SigEd448";

/// Generator tables, built on first use and shared by the whole process.
fn tables() -> &'static PrecomputedTables<Ed448Config> {
    static TABLES: OnceLock<PrecomputedTables<Ed448Config>> = OnceLock::new();
    TABLES.get_or_init(PrecomputedTables::build)
}

/// Hashes the dom4 separator and the given chunks with SHAKE256 and
/// reduces the 114-byte output modulo the group order.
fn hash_to_scalar(phflag: u8, context: &[u8], chunks: &[&[u8]]) -> Fr {
    let mut h = Shake256::default();
    h.update(DOM4_PREFIX);
    h.update(&[phflag, context.len() as u8]);
    h.update(context);
    for chunk in chunks {
        h.update(chunk);
    }
    let mut wide = [0u8; 114];
    h.finalize_xof().read(&mut wide);
    reduce_wide::<Ed448FrWideParam, Ed448FrParam, LIMBS_960, LIMBS_448>(&wide)
}

/// Clamps the little-endian representation of a 57-byte integer as
/// specified in RFC 8032, section 5.2.5: the two low bits clear, bit 447
/// set, and the final byte zero.
///
/// The clamped value is divisible by the cofactor and has a fixed top
/// bit, which protects against small-subgroup leaks and timing attacks
/// on implementations with scalar-length dependent multiplication.
#[must_use]
pub const fn clamp_integer(mut bytes: [u8; 57]) -> [u8; 57] {
    bytes[0] &= 0b1111_1100;
    bytes[55] |= 0b1000_0000;
    bytes[56] = 0;
    bytes
}

/// In "Edwards y" format, the curve point `(x, y)` is determined by the
/// y-coordinate and the sign of `x`.
///
/// The first 56 bytes hold the `y`-coordinate. The high bit of the 57th
/// byte gives the sign of `x`; its remaining bits must be zero.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct CompressedPointY([u8; 57]);

impl AsRef<[u8]> for CompressedPointY {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl CompressedPointY {
    /// The raw compressed bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 57] {
        self.0
    }

    /// Decodes the point, enforcing a canonical encoding: the
    /// y-coordinate must be reduced, the low bits of the final byte must
    /// be clear, and the sign bit of a zero x-coordinate must be clear.
    pub(crate) fn decompress(&self) -> Option<Affine<Ed448Config>> {
        if self.0[56] & 0b0111_1111 != 0 {
            return None;
        }
        let x_is_odd = self.0[56] >> 7 == 1;

        let y = Fq::from_bigint(U448::ct_from_le_slice(&self.0[..56]))?;
        recover_x(y, x_is_odd)
    }
}

impl From<Affine<Ed448Config>> for CompressedPointY {
    fn from(point: Affine<Ed448Config>) -> Self {
        let mut s = [0u8; 57];
        point.y.into_bigint().write_bytes_le(&mut s[..56]);

        let is_odd = point.x.into_bigint().is_odd();
        s[56] ^= u8::from(is_odd) << 7;

        CompressedPointY(s)
    }
}

/// Contains the secret scalar and domain separator used for generating
/// signatures.
///
/// `scalar` and `hash_prefix` are defined such that
/// `scalar || hash_prefix = H(sk)` where `sk` is the signing key and `H`
/// is SHAKE256 with a 114-byte output. Deriving the values for these
/// fields in any other way can lead to full key recovery.
///
/// Instances of this secret are automatically overwritten with zeroes
/// when they fall out of scope.
#[derive(Clone, PartialEq)]
pub(crate) struct ExpandedSecretKey {
    /// The secret scalar used for signing.
    pub(crate) scalar: SecretScalar<Ed448FrParam, LIMBS_448>,
    /// The domain separator used when hashing the message to generate the
    /// pseudorandom `r` value.
    pub(crate) hash_prefix: [u8; 57],
}

impl Drop for ExpandedSecretKey {
    fn drop(&mut self) {
        self.scalar.zeroize();
        self.hash_prefix.zeroize();
    }
}

impl ZeroizeOnDrop for ExpandedSecretKey {}

impl From<&SecretKey> for ExpandedSecretKey {
    fn from(secret_key: &SecretKey) -> ExpandedSecretKey {
        let mut h = Shake256::default();
        h.update(secret_key);
        let mut hash = [0u8; 114];
        h.finalize_xof().read(&mut hash);

        let mut scalar_bytes = [0u8; 57];
        let mut hash_prefix = [0u8; 57];
        scalar_bytes.copy_from_slice(&hash[00..57]);
        hash_prefix.copy_from_slice(&hash[57..114]);

        // Clamping zeroes the final byte, so the value fits 56 bytes.
        // It still exceeds the order and wants the constructor's
        // implicit reduction.
        scalar_bytes = clamp_integer(scalar_bytes);
        let scalar = SecretScalar::new(Fr::new(U448::ct_from_le_slice(
            &scalar_bytes[..56],
        )));
        scalar_bytes.zeroize();
        hash.zeroize();

        Self { scalar, hash_prefix }
    }
}

/// Ed448 signing key which can be used to produce signatures.
// Invariant: `verifying_key` is always the public key of
// `signing_key`. This prevents the signing function oracle attack
// described in https://github.com/MystenLabs/ed25519-unsafe-libs
#[derive(Clone, PartialEq)]
pub struct SigningKey {
    /// The seed the expanded key was derived from.
    pub(crate) secret_key: SecretKey,
    /// The secret half of this signing key.
    pub(crate) signing_key: ExpandedSecretKey,
    /// The public half of this signing key.
    pub(crate) verifying_key: VerifyingKey,
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        self.secret_key.zeroize();
    }
}

impl SigningKey {
    /// Construct a [`SigningKey`] from a [`SecretKey`].
    #[inline]
    #[must_use]
    pub fn from_bytes(secret_key: &SecretKey) -> Self {
        let signing_key = ExpandedSecretKey::from(secret_key);
        let point = mul_base(tables(), &signing_key.scalar);
        let compressed = CompressedPointY::from(point.normalize());
        let low_order = has_small_order(&point);
        let verifying_key = VerifyingKey { compressed, point, low_order };
        Self { secret_key: *secret_key, signing_key, verifying_key }
    }

    /// Convert this signing key to its seed bytes.
    #[must_use]
    pub fn to_bytes(&self) -> SecretKey {
        self.secret_key
    }

    /// View this signing key as its seed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Generate a fresh signing key from a cryptographically secure
    /// random number generator.
    #[cfg(feature = "rand")]
    #[must_use]
    pub fn generate<R: rand::CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut secret_key: SecretKey = [0u8; SECRET_KEY_LENGTH];
        rng.fill_bytes(&mut secret_key);
        let key = Self::from_bytes(&secret_key);
        secret_key.zeroize();
        key
    }

    /// Get the [`VerifyingKey`] for this [`SigningKey`].
    #[must_use]
    pub fn verifying_key(&self) -> VerifyingKey {
        self.verifying_key
    }

    /// Verify a signature on a message with this signing key's public
    /// key.
    #[must_use]
    pub fn is_valid_signature(
        &self,
        message: &[u8],
        signature: &Signature,
    ) -> bool {
        self.verifying_key.verify(message, signature)
    }

    /// Sign a message with this signing key. The pure flavor is the
    /// contextual flavor with an empty context.
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.sign_inner(0, &[], message)
    }

    /// Sign a message bound to a domain separation context of at most
    /// 255 bytes.
    pub fn sign_ctx(
        &self,
        context: &[u8],
        message: &[u8],
    ) -> Result<Signature, Error> {
        if context.len() > 255 {
            return Err(Error::ContextTooLong);
        }
        Ok(self.sign_inner(0, context, message))
    }

    /// Sign a message that was prehashed with SHAKE256 (the Ed448ph
    /// flavor). `prehash` must be the 64-byte digest of the message.
    pub fn sign_prehashed(
        &self,
        context: &[u8],
        prehash: &[u8],
    ) -> Result<Signature, Error> {
        if context.len() > 255 {
            return Err(Error::ContextTooLong);
        }
        if prehash.len() != 64 {
            return Err(Error::InvalidPrehashLength);
        }
        Ok(self.sign_inner(1, context, prehash))
    }

    fn sign_inner(
        &self,
        phflag: u8,
        context: &[u8],
        message: &[u8],
    ) -> Signature {
        let r = SecretScalar::new(hash_to_scalar(
            phflag,
            context,
            &[&self.signing_key.hash_prefix, message],
        ));

        let r_bytes =
            CompressedPointY::from(mul_base(tables(), &r).normalize());

        let k = hash_to_scalar(
            phflag,
            context,
            &[
                r_bytes.as_ref(),
                self.verifying_key.compressed.as_ref(),
                message,
            ],
        );

        let s = self.signing_key.scalar.mul_add(&k, &r);
        let mut s_bytes = [0u8; 57];
        s.into_bigint().write_bytes_le(&mut s_bytes[..56]);

        Signature { r: r_bytes, s: s_bytes }
    }
}

/// An Ed448 public key.
///
/// # Note
///
/// The `Eq` impl here uses the compressed Edwards y encoding, _not_ the
/// algebraic representation.
#[derive(Copy, Clone)]
pub struct VerifyingKey {
    /// The encoding of the point, hashed into every signature.
    compressed: CompressedPointY,
    /// Decompressed form used for curve arithmetic.
    point: Extended<Ed448Config>,
    /// Whether the point lies in the small torsion subgroup. Such keys
    /// sign nothing: every verification against them fails.
    low_order: bool,
}

impl PartialEq for VerifyingKey {
    fn eq(&self, other: &Self) -> bool {
        self.compressed == other.compressed
    }
}

impl Eq for VerifyingKey {}

impl VerifyingKey {
    /// Decodes a public key, rejecting bytes that are not a canonical
    /// encoding of a curve point.
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<Self, Error> {
        let compressed = CompressedPointY(*bytes);
        let affine =
            compressed.decompress().ok_or(Error::InvalidPublicKey)?;
        let point = Extended::from(affine);
        Ok(Self { compressed, point, low_order: has_small_order(&point) })
    }

    /// The canonical encoding of this key.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.compressed.to_bytes()
    }

    /// Whether this key lies in the small torsion subgroup.
    ///
    /// Such keys pass decoding but never verify a signature.
    #[must_use]
    pub const fn is_weak(&self) -> bool {
        self.low_order
    }

    /// Full public key validation: checks that the point generates the
    /// prime-order subgroup, i.e. that it has order exactly `L`.
    ///
    /// Decoding already performs the cheap partial validation; this
    /// costs a full scalar multiplication and is only needed by
    /// protocols that cannot tolerate a torsion component at all.
    #[must_use]
    pub fn validate_full(&self) -> bool {
        !self.point.is_zero()
            && mul_vartime::<_, _, LIMBS_448>(
                &self.point,
                &Ed448FrParam::MODULUS,
            )
            .is_zero()
    }

    /// Verify a signature on a message.
    ///
    /// Uses the cofactored equation `[4][s]B = [4]R + [4][k]A`, which
    /// accepts every signature the cofactorless equation does.
    #[must_use]
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.verify_inner(0, &[], message, signature)
    }

    /// Verify a contextual signature. Contexts over 255 bytes cannot
    /// have been signed, so they simply fail verification.
    #[must_use]
    pub fn verify_ctx(
        &self,
        context: &[u8],
        message: &[u8],
        signature: &Signature,
    ) -> bool {
        context.len() <= 255
            && self.verify_inner(0, context, message, signature)
    }

    /// Verify an Ed448ph signature over a 64-byte SHAKE256 digest of
    /// the message.
    #[must_use]
    pub fn verify_prehashed(
        &self,
        context: &[u8],
        prehash: &[u8],
        signature: &Signature,
    ) -> bool {
        context.len() <= 255
            && prehash.len() == 64
            && self.verify_inner(1, context, prehash, signature)
    }

    fn verify_inner(
        &self,
        phflag: u8,
        context: &[u8],
        message: &[u8],
        signature: &Signature,
    ) -> bool {
        if self.low_order {
            return false;
        }
        let Some(r_affine) = signature.r.decompress() else {
            return false;
        };
        let Some(s) = signature.decode_s() else {
            return false;
        };

        let k = hash_to_scalar(
            phflag,
            context,
            &[signature.r.as_ref(), self.compressed.as_ref(), message],
        );

        verify_combination_vartime::<_, _, LIMBS_448, LIMBS_896>(
            tables(),
            &self.point,
            &Extended::from(r_affine),
            &s,
            &k,
        )
    }
}

/// A container for the byte serialization of an Ed448 signature.
///
/// It does not necessarily hold well-formed field or curve elements;
/// those are validated when a signature is verified.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Signature {
    /// Encoding of the nonce point `R = [r]B`.
    r: CompressedPointY,
    /// Encoding of the response scalar `s = r + k * scalar (mod L)`.
    s: [u8; 57],
}

impl Signature {
    /// Interprets the bytes as a signature. No validation happens here.
    #[must_use]
    pub const fn from_bytes(bytes: &[u8; SIGNATURE_LENGTH]) -> Self {
        let mut r = [0u8; 57];
        let mut s = [0u8; 57];
        let mut i = 0;
        while i < 57 {
            r[i] = bytes[i];
            s[i] = bytes[i + 57];
            i += 1;
        }
        Self { r: CompressedPointY(r), s }
    }

    /// The 114-byte serialization, `R || s`.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..57].copy_from_slice(&self.r.0);
        bytes[57..].copy_from_slice(&self.s);
        bytes
    }

    /// Decodes `s`, rejecting values at or above the group order. A
    /// canonical `s` never touches the 57th byte.
    pub(crate) fn decode_s(&self) -> Option<Fr> {
        if self.s[56] != 0 {
            return None;
        }
        Fr::from_bigint(U448::ct_from_le_slice(&self.s[..56]))
    }
}
