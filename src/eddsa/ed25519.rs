//! The Ed25519 signature engine ([RFC 8032], section 5.1): SHA-512 over
//! edwards25519, with 32-byte keys and 64-byte signatures.
//!
//! [RFC 8032]: https://www.rfc-editor.org/rfc/rfc8032

use std::sync::OnceLock;

use sha2::{Digest, Sha512};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    arithmetic::{uint::U256, BigInteger},
    curve::te::{
        instance::ed25519::{
            Ed25519Config, Ed25519FrParam, Ed25519FrWideParam, Fq, Fr,
        },
        Affine, Extended,
    },
    eddsa::{has_small_order, recover_x, Error},
    field::{
        fp::{FpParams, LIMBS_256, LIMBS_512},
        PrimeField,
    },
    scalar::{reduce_wide, SecretScalar},
    scalar_mul::{
        comb::mul_base,
        tables::PrecomputedTables,
        vartime::{mul_vartime, verify_combination_vartime},
    },
};

/// The length of an Ed25519 secret key, in bytes.
pub const SECRET_KEY_LENGTH: usize = 32;
/// The length of an Ed25519 public key, in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;
/// The length of an Ed25519 signature, in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// Ed25519 secret key as defined in [RFC 8032, section 5.1.5]:
///
/// > The private key is 32 octets (256 bits, corresponding to b) of
/// > cryptographically secure random data.
///
/// [RFC 8032, section 5.1.5]: https://www.rfc-editor.org/rfc/rfc8032#section-5.1.5
pub type SecretKey = [u8; SECRET_KEY_LENGTH];

/// Domain separator of the contextual and prehashed flavors.
const DOM2_PREFIX: &[u8] = b"SigEd25519 no Ed25519 collisions";

/// Generator tables, built on first use and shared by the whole process.
fn tables() -> &'static PrecomputedTables<Ed25519Config> {
    static TABLES: OnceLock<PrecomputedTables<Ed25519Config>> =
        OnceLock::new();
    TABLES.get_or_init(PrecomputedTables::build)
}

/// Interprets a 64-byte digest as an integer and reduces it modulo the
/// group order.
fn reduce_hash(bytes: &[u8]) -> Fr {
    reduce_wide::<Ed25519FrWideParam, Ed25519FrParam, LIMBS_512, LIMBS_256>(
        bytes,
    )
}

/// Absorbs the dom2 prefix when a flavor requires one. The pure flavor
/// hashes without any prefix.
fn write_dom(h: &mut Sha512, dom: Option<(u8, &[u8])>) {
    if let Some((phflag, context)) = dom {
        h.update(DOM2_PREFIX);
        h.update([phflag, context.len() as u8]);
        h.update(context);
    }
}

/// Clamps the given little-endian representation of a 32-byte integer.
/// Clamping the value puts it in the range:
///
/// **n ∈ 2^254 + 8\*{0, 1, 2, 3, . . ., 2^251 − 1}**
///
/// The clamped value is divisible by the cofactor and has its top bit
/// fixed, which protects against small-subgroup leaks and timing attacks
/// on implementations with scalar-length dependent multiplication.
#[must_use]
pub const fn clamp_integer(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 0b1111_1000;
    bytes[31] &= 0b0111_1111;
    bytes[31] |= 0b0100_0000;
    bytes
}

/// In "Edwards y" format, the curve point `(x, y)` is determined by the
/// y-coordinate and the sign of `x`.
///
/// The first 255 bits of a `CompressedPointY` represent the
/// `y`-coordinate. The high bit of the 32nd byte gives the sign of `x`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct CompressedPointY([u8; 32]);

impl AsRef<[u8]> for CompressedPointY {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl CompressedPointY {
    /// The raw compressed bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Decodes the point, enforcing a canonical encoding: the
    /// y-coordinate must be reduced and the sign bit of a zero
    /// x-coordinate must be clear.
    pub(crate) fn decompress(&self) -> Option<Affine<Ed25519Config>> {
        let x_is_odd = self.0[31] >> 7 == 1;
        let mut y_bytes = self.0;
        y_bytes[31] &= 0b0111_1111;

        let y = Fq::from_bigint(U256::ct_from_le_slice(&y_bytes))?;
        recover_x(y, x_is_odd)
    }
}

impl From<Affine<Ed25519Config>> for CompressedPointY {
    fn from(point: Affine<Ed25519Config>) -> Self {
        let mut s: [u8; 32] = point
            .y
            .into_bigint()
            .into_bytes_le()
            .try_into()
            .expect("y coordinate should be 32 bytes");

        let is_odd = point.x.into_bigint().is_odd();
        s[31] ^= u8::from(is_odd) << 7;

        CompressedPointY(s)
    }
}

/// Contains the secret scalar and domain separator used for generating
/// signatures.
///
/// `scalar` and `hash_prefix` are defined such that
/// `scalar || hash_prefix = H(sk)` where `sk` is the signing key and `H`
/// is SHA-512. Deriving the values for these fields in any other way can
/// lead to full key recovery.
///
/// Instances of this secret are automatically overwritten with zeroes
/// when they fall out of scope.
#[derive(Clone, PartialEq)]
pub(crate) struct ExpandedSecretKey {
    /// The secret scalar used for signing.
    pub(crate) scalar: SecretScalar<Ed25519FrParam, LIMBS_256>,
    /// The domain separator used when hashing the message to generate the
    /// pseudorandom `r` value.
    pub(crate) hash_prefix: [u8; 32],
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
        let hash = Sha512::digest(secret_key);
        let mut scalar_bytes = [0u8; 32];
        let mut hash_prefix = [0u8; 32];
        scalar_bytes.copy_from_slice(&hash[00..32]);
        hash_prefix.copy_from_slice(&hash[32..64]);

        // The clamped value exceeds the order, so the constructor's
        // implicit reduction is wanted here.
        let scalar = SecretScalar::new(Fr::new(U256::ct_from_le_slice(
            &clamp_integer(scalar_bytes),
        )));
        scalar_bytes.zeroize();

        Self { scalar, hash_prefix }
    }
}

/// Ed25519 signing key which can be used to produce signatures.
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

    /// Sign a message with this signing key.
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.sign_inner(None, message)
    }

    /// Sign a message bound to a domain separation context of at most 255
    /// bytes (the Ed25519ctx flavor).
    pub fn sign_ctx(
        &self,
        context: &[u8],
        message: &[u8],
    ) -> Result<Signature, Error> {
        if context.len() > 255 {
            return Err(Error::ContextTooLong);
        }
        Ok(self.sign_inner(Some((0, context)), message))
    }

    /// Sign a message that was prehashed with SHA-512 (the Ed25519ph
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
        Ok(self.sign_inner(Some((1, context)), prehash))
    }

    fn sign_inner(
        &self,
        dom: Option<(u8, &[u8])>,
        message: &[u8],
    ) -> Signature {
        let mut h = Sha512::new();
        write_dom(&mut h, dom);
        h.update(self.signing_key.hash_prefix);
        h.update(message);
        let r = SecretScalar::new(reduce_hash(&h.finalize()));

        let r_bytes =
            CompressedPointY::from(mul_base(tables(), &r).normalize());

        let mut h = Sha512::new();
        write_dom(&mut h, dom);
        h.update(r_bytes);
        h.update(self.verifying_key.compressed);
        h.update(message);
        let k = reduce_hash(&h.finalize());

        let s = self.signing_key.scalar.mul_add(&k, &r);
        let s_bytes: [u8; 32] = s
            .into_bigint()
            .into_bytes_le()
            .try_into()
            .expect("scalar should be 32 bytes");

        Signature { r: r_bytes, s: s_bytes }
    }
}

/// An Ed25519 public key.
///
/// # Note
///
/// The `Eq` impl here uses the compressed Edwards y encoding, _not_ the
/// algebraic representation. This means if this `VerifyingKey` is
/// non-canonically encoded, it will be considered unequal to the other
/// equivalent encoding, despite the two representing the same point.
#[derive(Copy, Clone)]
pub struct VerifyingKey {
    /// The encoding of the point, hashed into every signature.
    compressed: CompressedPointY,
    /// Decompressed form used for curve arithmetic.
    point: Extended<Ed25519Config>,
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
            && mul_vartime::<_, _, LIMBS_256>(
                &self.point,
                &Ed25519FrParam::MODULUS,
            )
            .is_zero()
    }

    /// Verify a signature on a message.
    ///
    /// Uses the cofactored equation `[8][s]B = [8]R + [8][k]A`, which
    /// accepts every signature the cofactorless equation does.
    #[must_use]
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.verify_inner(None, message, signature)
    }

    /// Verify an Ed25519ctx signature. Contexts over 255 bytes cannot
    /// have been signed, so they simply fail verification.
    #[must_use]
    pub fn verify_ctx(
        &self,
        context: &[u8],
        message: &[u8],
        signature: &Signature,
    ) -> bool {
        context.len() <= 255
            && self.verify_inner(Some((0, context)), message, signature)
    }

    /// Verify an Ed25519ph signature over a 64-byte SHA-512 digest of
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
            && self.verify_inner(Some((1, context)), prehash, signature)
    }

    fn verify_inner(
        &self,
        dom: Option<(u8, &[u8])>,
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

        let mut h = Sha512::new();
        write_dom(&mut h, dom);
        h.update(signature.r);
        h.update(self.compressed);
        h.update(message);
        let k = reduce_hash(&h.finalize());

        verify_combination_vartime::<_, _, LIMBS_256, LIMBS_512>(
            tables(),
            &self.point,
            &Extended::from(r_affine),
            &s,
            &k,
        )
    }
}

/// A container for the byte serialization of an Ed25519 signature.
///
/// It does not necessarily hold well-formed field or curve elements;
/// those are validated when a signature is verified.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Signature {
    /// Encoding of the nonce point `R = [r]B`.
    r: CompressedPointY,
    /// Encoding of the response scalar `s = r + k * scalar (mod L)`.
    s: [u8; 32],
}

impl Signature {
    /// Interprets the bytes as a signature. No validation happens here.
    #[must_use]
    pub const fn from_bytes(bytes: &[u8; SIGNATURE_LENGTH]) -> Self {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        let mut i = 0;
        while i < 32 {
            r[i] = bytes[i];
            s[i] = bytes[i + 32];
            i += 1;
        }
        Self { r: CompressedPointY(r), s }
    }

    /// The 64-byte serialization, `R || s`.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..32].copy_from_slice(&self.r.0);
        bytes[32..].copy_from_slice(&self.s);
        bytes
    }

    /// Decodes `s`, rejecting values at or above the group order.
    pub(crate) fn decode_s(&self) -> Option<Fr> {
        Fr::from_bigint(U256::ct_from_le_slice(&self.s))
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use proptest::prelude::*;

    use super::*;

    /// Test vectors from RFC 8032, section 7.1.
    const RFC_VECTORS: &[(&[u8; 32], &[u8; 32], &[u8], &[u8; 64])] = &[
        (
            &hex!("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60"),
            &hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"),
            &[],
            &hex!("e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b"),
        ),
        (
            &hex!("4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb"),
            &hex!("3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c"),
            &hex!("72"),
            &hex!("92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00"),
        ),
        (
            &hex!("c5aa8df43f9f837bedb7442f31dcb7b166d38535076f094b85ce3a2e0b4458f7"),
            &hex!("fc51cd8e6218a1a38da47ed00230f0580816ed13ba3303ac5deb911548908025"),
            &hex!("af82"),
            &hex!("6291d657deec24024827e69c3abe01a30ce548a284743a445e3680d7db5ac3ac18ff9b538d16f290ae67f760984dc6594a7c15e9716ed28dc027beceea1ec40a"),
        ),
    ];

    #[test]
    fn rfc_vectors() {
        for (secret, public, message, signature) in RFC_VECTORS {
            let signing_key = SigningKey::from_bytes(secret);
            assert_eq!(*secret, signing_key.as_bytes());
            assert_eq!(**public, signing_key.verifying_key().to_bytes());

            let sig = signing_key.sign(message);
            assert_eq!(**signature, sig.to_bytes());

            let verifying_key = VerifyingKey::from_bytes(public).unwrap();
            assert!(verifying_key.verify(message, &sig));
            assert!(verifying_key.validate_full());
        }
    }

    #[test]
    fn rfc_prehashed_vector() {
        // RFC 8032, section 7.3: Ed25519ph over the message "abc".
        let secret = hex!("833fe62409237b9d62ec77587520911e9a759cec1d19755b7da901b96dca3d42");
        let public = hex!("ec172b93ad5e563bf4932c70e1245034c35467ef2efd4d64ebf819683467e2bf");
        let expected = hex!("98a70222f0b8121aa9d30f813d683f809e462b469c7ff87639499bb94e6dae4131f85042463c2a355a2003d062adf5aaa10b8c61e636062aaad11c2a26083406");

        let signing_key = SigningKey::from_bytes(&secret);
        assert_eq!(public, signing_key.verifying_key().to_bytes());

        let prehash = Sha512::digest(b"abc");
        let sig = signing_key.sign_prehashed(&[], &prehash).unwrap();
        assert_eq!(expected, sig.to_bytes());

        let verifying_key = VerifyingKey::from_bytes(&public).unwrap();
        assert!(verifying_key.verify_prehashed(&[], &prehash, &sig));
        // The pure flavor must not accept a prehashed signature.
        assert!(!verifying_key.verify(&prehash, &sig));
    }

    #[test]
    fn context_binds_signature() {
        let signing_key = SigningKey::from_bytes(&[7u8; 32]);
        let verifying_key = signing_key.verifying_key();
        let message = b"attack at dawn";

        let sig = signing_key.sign_ctx(b"fleet", message).unwrap();
        assert!(verifying_key.verify_ctx(b"fleet", message, &sig));
        assert!(!verifying_key.verify_ctx(b"flock", message, &sig));
        assert!(!verifying_key.verify(message, &sig));

        let oversized = [0u8; 256];
        assert_eq!(
            Err(Error::ContextTooLong),
            signing_key.sign_ctx(&oversized, message),
        );
        assert!(!verifying_key.verify_ctx(&oversized, message, &sig));
    }

    #[test]
    fn prehash_length_is_checked() {
        let signing_key = SigningKey::from_bytes(&[9u8; 32]);
        assert_eq!(
            Err(Error::InvalidPrehashLength),
            signing_key.sign_prehashed(&[], &[0u8; 32]),
        );
    }

    #[test]
    fn rejects_noncanonical_s() {
        let signing_key = SigningKey::from_bytes(&[3u8; 32]);
        let verifying_key = signing_key.verifying_key();
        let message = b"test";
        let sig = signing_key.sign(message);

        // Add the order to s; the cofactorless equation would still hold.
        let mut bytes = sig.to_bytes();
        let s = U256::ct_from_le_slice(&bytes[32..]);
        let bumped = s.ct_wrapping_add(&Ed25519FrParam::MODULUS);
        bumped.write_bytes_le(&mut bytes[32..]);

        let tampered = Signature::from_bytes(&bytes);
        assert!(!verifying_key.verify(message, &tampered));
    }

    #[test]
    fn rejects_noncanonical_r_and_keys() {
        // The y-coordinate p is not reduced: its encoding must decode to
        // nothing.
        let mut unreduced = [0u8; 32];
        crate::curve::te::instance::ed25519::Ed25519FqParam::MODULUS
            .write_bytes_le(&mut unreduced);
        assert!(VerifyingKey::from_bytes(&unreduced).is_err());

        let signing_key = SigningKey::from_bytes(&[5u8; 32]);
        let message = b"test";
        let sig = signing_key.sign(message);
        let mut bytes = sig.to_bytes();
        bytes[..32].copy_from_slice(&unreduced);
        let tampered = Signature::from_bytes(&bytes);
        assert!(!signing_key.verifying_key().verify(message, &tampered));
    }

    #[test]
    fn weak_keys_are_flagged_and_rejected() {
        // The small-order point of order 1: the identity encodes as y = 1.
        let mut identity = [0u8; 32];
        identity[0] = 1;
        let weak = VerifyingKey::from_bytes(&identity).unwrap();
        assert!(weak.is_weak());
        assert!(!weak.validate_full());

        let signing_key = SigningKey::from_bytes(&[11u8; 32]);
        let sig = signing_key.sign(b"x");
        assert!(!weak.verify(b"x", &sig));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn sign_and_verify(secret_key: SecretKey, message: Vec<u8>) {
            let signing_key = SigningKey::from_bytes(&secret_key);
            let verifying_key = signing_key.verifying_key();

            let sig = signing_key.sign(&message);
            prop_assert!(verifying_key.verify(&message, &sig));

            let round_trip = Signature::from_bytes(&sig.to_bytes());
            prop_assert_eq!(sig, round_trip);

            let decoded =
                VerifyingKey::from_bytes(&verifying_key.to_bytes()).unwrap();
            prop_assert!(decoded.verify(&message, &sig));
        }

        #[test]
        fn tampered_messages_fail(secret_key: SecretKey, message: Vec<u8>) {
            let signing_key = SigningKey::from_bytes(&secret_key);
            let verifying_key = signing_key.verifying_key();
            let sig = signing_key.sign(&message);

            let mut other = message.clone();
            other.push(0x42);
            prop_assert!(!verifying_key.verify(&other, &sig));

            let mut bytes = sig.to_bytes();
            bytes[0] ^= 0x01;
            let tampered = Signature::from_bytes(&bytes);
            prop_assert!(!verifying_key.verify(&message, &tampered));
        }
    }
}
