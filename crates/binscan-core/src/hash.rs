//! Whole-file MD5 digest.

use std::io;
use std::io::Read;

use md5::Digest;
use md5::Md5;

/// Streams `reader` to its end through MD5 and returns the digest as 32
/// lowercase hex characters.
///
/// # Errors
///
/// Returns any read error from `reader`.
///
/// # Examples
///
/// ```
/// use binscan_core::hash::md5_hex;
///
/// let digest = md5_hex(&b"abc"[..]).unwrap();
/// assert_eq!(digest, "900150983cd24fb0d6963f7d28e17f72");
/// ```
pub fn md5_hex<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Md5::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}
