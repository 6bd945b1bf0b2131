//! Encrypts and decrypts the FIPS-197 appendix B block.

use aes_core::{decrypt_block, encrypt_block};

fn main() -> Result<(), aes_core::Error> {
    let key = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];
    let plaintext = [
        0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d, 0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37, 0x07,
        0x34,
    ];

    let ciphertext = encrypt_block(&plaintext, &key)?;
    let decrypted = decrypt_block(&ciphertext, &key)?;
    assert_eq!(decrypted, plaintext);

    println!("plaintext:  {}", hex::encode(plaintext));
    println!("ciphertext: {}", hex::encode(ciphertext));
    Ok(())
}
