/*!
EdDSA signatures over the Ed25519 and Ed448 curves, as specified in
[RFC 8032].

> Note that `edsig` is still `0.*.*`, so breaking changes
> [may occur at any time](https://semver.org/#spec-item-4). If you must
> depend on `edsig`, we recommend pinning to a specific version, i.e.,
> `=0.y.z`.

## Signing and verifying

[`eddsa::ed25519`] and [`eddsa::ed448`] each expose a [`SigningKey`]
derived from a seed, and a [`VerifyingKey`] decoded from its canonical
byte encoding. Both engines support the pure, contextual and prehashed
flavors of their scheme:

```rust
use edsig::eddsa::ed25519::{SigningKey, VerifyingKey};

let signing_key = SigningKey::from_bytes(&[42u8; 32]);
let signature = signing_key.sign(b"message");

let verifying_key =
    VerifyingKey::from_bytes(&signing_key.verifying_key().to_bytes())
        .expect("the encoding round-trips");
assert!(verifying_key.verify(b"message", &signature));
```

Verification is cofactored, i.e. it checks `[c][s]B = [c]R + [c][k]A`,
so all conformant verifiers agree on which signatures are valid.

## Lower layers

The supporting arithmetic is public: fixed-width integers in
[`arithmetic`], Montgomery-form prime fields in [`field`], twisted
Edwards curve groups in [`curve`], and scalar multiplication (signed
fixed-base combs and variable-time multiscalar kernels) in
[`scalar_mul`].

[`SigningKey`]: eddsa::ed25519::SigningKey
[`VerifyingKey`]: eddsa::ed25519::VerifyingKey
[RFC 8032]: https://www.rfc-editor.org/rfc/rfc8032
*/

#[macro_use]
pub mod arithmetic;
pub use arithmetic::{uint::Uint, BigInteger};
pub mod bits;
pub mod const_helpers;
pub mod curve;
pub mod eddsa;
#[macro_use]
pub mod field;
pub mod scalar;
pub mod scalar_mul;
