//! Command-line interface for `aes-core`.

#![forbid(unsafe_code)]

use aes_core::{decrypt_block, encrypt_block, Block};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info, LevelFilter};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// FIPS-197 appendix B and C.1 vectors as (key, plaintext, ciphertext).
const KNOWN_ANSWERS: [(&str, &str, &str); 2] = [
    (
        "2b7e151628aed2a6abf7158809cf4f3c",
        "3243f6a8885a308d313198a2e0370734",
        "3925841d02dc09fbdc118597196a0b32",
    ),
    (
        "000102030405060708090a0b0c0d0e0f",
        "00112233445566778899aabbccddeeff",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
];

/// Accepted band for the mean fraction of ciphertext bits flipped by one key bit.
const AVALANCHE_BAND: std::ops::RangeInclusive<f64> = 0.40..=0.60;

/// AES-128 single-block CLI.
#[derive(Parser)]
#[command(name = "aes128", version, author, about = "AES-128 single-block cipher")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-byte block.
    Enc {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one 16-byte block.
    Dec {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Verify known-answer vectors, random round trips and key avalanche.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt a block, decrypt it back and print every value.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Use the FIPS-197 appendix B key and plaintext instead of random ones.
        #[arg(long, default_value_t = false)]
        fips: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Enc { key_hex, block_hex } => cmd_enc(&key_hex, &block_hex),
        Commands::Dec { key_hex, block_hex } => cmd_dec(&key_hex, &block_hex),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { seed, fips } => cmd_demo(seed, fips),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn cmd_enc(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = decode_hex(key_hex, "key")?;
    let block = decode_hex(block_hex, "plaintext")?;
    let ciphertext = encrypt_block(&block, &key).context("encrypt block")?;
    println!("{}", hex::encode(ciphertext));
    Ok(())
}

fn cmd_dec(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = decode_hex(key_hex, "key")?;
    let block = decode_hex(block_hex, "ciphertext")?;
    let plaintext = decrypt_block(&block, &key).context("decrypt block")?;
    println!("{}", hex::encode(plaintext));
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    for (key_hex, plain_hex, cipher_hex) in KNOWN_ANSWERS {
        let key = decode_hex(key_hex, "key")?;
        let plaintext = decode_hex(plain_hex, "plaintext")?;
        let expected = decode_hex(cipher_hex, "ciphertext")?;
        let ciphertext = encrypt_block(&plaintext, &key)?;
        if ciphertext[..] != expected[..] {
            bail!("known-answer mismatch for key {key_hex}");
        }
        if decrypt_block(&ciphertext, &key)?[..] != plaintext[..] {
            bail!("known-answer decryption mismatch for key {key_hex}");
        }
        debug!("known answer ok for key {key_hex}");
    }
    println!("known answers: {} ok", KNOWN_ANSWERS.len());

    let mut rng = seeded_rng(seed);
    for _ in 0..samples {
        let key: Block = random_block(&mut rng);
        let block: Block = random_block(&mut rng);
        let ciphertext = encrypt_block(&block, &key)?;
        if decrypt_block(&ciphertext, &key)? != block {
            bail!("round trip failed for key {}", hex::encode(key));
        }
    }
    println!("round trips: {samples} ok");

    if samples > 0 {
        let ratio = key_avalanche(&mut rng, samples)?;
        println!("key avalanche: {ratio:.4} of output bits flipped on average");
        if !AVALANCHE_BAND.contains(&ratio) {
            bail!("key avalanche ratio {ratio:.4} outside {AVALANCHE_BAND:?}");
        }
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>, fips: bool) -> Result<()> {
    let (key, plaintext) = if fips {
        let (key_hex, plain_hex, _) = KNOWN_ANSWERS[0];
        (
            decode_hex(key_hex, "key")?,
            decode_hex(plain_hex, "plaintext")?,
        )
    } else {
        let mut rng = seeded_rng(seed);
        (
            random_block(&mut rng).to_vec(),
            random_block(&mut rng).to_vec(),
        )
    };

    let ciphertext = encrypt_block(&plaintext, &key)?;
    let decrypted = decrypt_block(&ciphertext, &key)?;

    println!("key:        {}", hex::encode(&key));
    println!("plaintext:  {}", hex::encode(&plaintext));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted:  {}", hex::encode(decrypted));
    if decrypted[..] != plaintext[..] {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

/// Mean fraction of ciphertext bits that change when one random key bit flips.
fn key_avalanche(rng: &mut impl RngCore, trials: usize) -> Result<f64> {
    let mut flipped_bits = 0u64;
    for _ in 0..trials {
        let key: Block = random_block(rng);
        let plaintext: Block = random_block(rng);
        let bit = rng.gen_range(0..128);
        let mut other = key;
        other[bit / 8] ^= 1 << (bit % 8);

        let a = encrypt_block(&plaintext, &key)?;
        let b = encrypt_block(&plaintext, &other)?;
        flipped_bits += a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| u64::from((x ^ y).count_ones()))
            .sum::<u64>();
    }
    Ok(flipped_bits as f64 / (trials as f64 * 128.0))
}

fn decode_hex(hex_str: &str, what: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))
}

fn random_block(rng: &mut impl RngCore) -> Block {
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);
    block
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => {
            info!("using fixed seed {value}");
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
        }
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
