use std::{
    fs::File,
    io::{self, BufReader, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use clap::Parser;
use secretbase::{Convert, HashWriter, Output, Selection, Variant};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Print SHA-3 or SHAKE digests of files (or stdin).
#[derive(Parser, Debug)]
#[command(name = "secretbase", version)]
struct Args {
    /// Files to hash. With no file, or when a file is `-`, read stdin.
    files: Vec<PathBuf>,
    /// Digest size in bits. 224, 256, 384 and 512 select SHA3; anything
    /// else in 8..=2^24 selects SHAKE256.
    #[arg(short, long, default_value_t = 256)]
    bits: u32,
    /// Force a function instead of deriving it from `--bits`. `--bits`
    /// still sets the SHAKE output size.
    #[arg(short, long)]
    algorithm: Option<Variant>,
    /// Output encoding.
    #[arg(short, long, value_enum, default_value_t = Convert::Hex)]
    convert: Convert,
}

impl Args {
    fn selection(&self) -> Result<Selection, secretbase::Error> {
        let by_bits = Selection::from_bits(self.bits)?;
        match self.algorithm {
            Some(variant) => Selection::with_variant(variant, by_bits.output_len()),
            None => Ok(by_bits),
        }
    }

    /// Input paths, with `-` standing for stdin.
    fn inputs(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            vec![PathBuf::from("-")]
        } else {
            self.files.clone()
        }
    }
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if is_stdin(path) {
        return Ok(Box::new(io::stdin().lock()));
    }
    let f = File::open(path).with_context(|| format!("could not open {}", path.display()))?;
    Ok(Box::new(BufReader::new(f)))
}

fn hash_reader(mut reader: impl Read, selection: Selection) -> Result<Vec<u8>> {
    let mut sink = HashWriter::new(selection);
    let n = io::copy(&mut reader, &mut sink)?;
    debug!(bytes = n, "input hashed");
    Ok(sink.finish()?)
}

/// `<digest>  <name>` for text encodings, the bare bytes for raw.
fn write_digest(out: &mut impl Write, md: Vec<u8>, convert: Convert, name: &Path) -> io::Result<()> {
    match Output::encode(md, convert) {
        Output::Raw(bytes) => out.write_all(&bytes),
        text => writeln!(out, "{text}  {}", name.display()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let selection = args.selection()?;
    info!(variant = %selection.variant(), output_len = selection.output_len(), "hashing");

    let mut stdout = io::stdout().lock();
    for path in args.inputs() {
        let md = hash_reader(open_input(&path)?, selection)
            .with_context(|| format!("could not read {}", path.display()))?;
        write_digest(&mut stdout, md, args.convert, &path)?;
    }
    stdout.flush()?;
    Ok(())
}
