use std::{fs, num::ParseIntError, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn, LevelFilter};
use strum::IntoEnumIterator;

use superh_isa::{
    decode_bytes, CitationTable, DecodeContext, Decoded, Endianness, Entry, Isa, Manual,
    SuperhVersion,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "SuperH instruction set reference")]
struct CliArgs {
    /// CPUs to restrict to, e.g. `sh4` or `sh2a,sh_dsp`
    #[arg(long, global = true)]
    cpu: Option<SuperhVersion>,
    /// Tab separated citation table replacing the built-in one, whose page
    /// numbers are estimates
    #[arg(long, global = true)]
    citations: Option<PathBuf>,
    /// Decode as if FPSCR.SZ were set
    #[arg(long, global = true)]
    fpscr_sz: bool,
    /// Decode as if FPSCR.PR were set
    #[arg(long, global = true)]
    fpscr_pr: bool,
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List instructions, grouped by block
    List {
        /// Only blocks whose name contains this text
        #[arg(long)]
        block: Option<String>,
    },
    /// Print every record whose format matches a regex
    Show { pattern: String },
    /// Decode one instruction from hex halfwords
    Decode {
        #[arg(required = true, value_parser = parse_word)]
        words: Vec<u16>,
        #[arg(long, default_value = "0", value_parser = parse_dec_or_hex)]
        base: u32,
    },
    /// Disassemble a raw binary
    Disasm {
        file: PathBuf,
        #[arg(long)]
        big_endian: bool,
        #[arg(long, default_value = "0", value_parser = parse_dec_or_hex)]
        base: u32,
    },
    /// Check citation coverage and encoding ambiguities
    Check,
}

fn parse_dec_or_hex(s: &str) -> Result<u32, ParseIntError> {
    if let Some(hex) = s.strip_prefix("0x") {
        u32::from_str_radix(hex, 16)
    } else {
        // try decimal and non-prefixed hex
        s.parse::<u32>().or_else(|_| u32::from_str_radix(s, 16))
    }
}

fn parse_word(s: &str) -> Result<u16, ParseIntError> {
    u16::from_str_radix(s.strip_prefix("0x").unwrap_or(s), 16)
}

const CPUS: [SuperhVersion; 9] = [
    SuperhVersion::SH1,
    SuperhVersion::SH2,
    SuperhVersion::SH2E,
    SuperhVersion::SH2A,
    SuperhVersion::SH3,
    SuperhVersion::SH3E,
    SuperhVersion::SH4,
    SuperhVersion::SH4A,
    SuperhVersion::DSP,
];

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let citations = match &args.citations {
        Some(path) => CitationTable::load(path)?,
        None => CitationTable::builtin()?,
    };
    let isa = Isa::with_citations(&citations)?;
    info!("Loaded {} instructions", isa.entries().count());

    let ctx = DecodeContext {
        fpscr_sz: args.fpscr_sz,
        fpscr_pr: args.fpscr_pr,
        ..DecodeContext::new(args.cpu.unwrap_or(SuperhVersion::SH4))
    };

    match args.command {
        Commands::List { block } => list(&isa, args.cpu, block.as_deref()),
        Commands::Show { pattern } => show(&isa, args.cpu, &pattern)?,
        Commands::Decode { words, base } => decode(&isa, &words, &ctx.at(base))?,
        Commands::Disasm {
            file,
            big_endian,
            base,
        } => {
            let data = fs::read(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let endianness = if big_endian {
                Endianness::Big
            } else {
                Endianness::Little
            };
            disasm(&isa, &data, endianness, &ctx.at(base));
        }
        Commands::Check => check(&isa)?,
    }

    Ok(())
}

fn list(isa: &Isa, cpu: Option<SuperhVersion>, block: Option<&str>) {
    let cpu = cpu.unwrap_or(SuperhVersion::ANY);

    for insn_block in isa.blocks() {
        if let Some(filter) = block {
            if !insn_block
                .name
                .to_lowercase()
                .contains(&filter.to_lowercase())
            {
                continue;
            }
        }

        let entries = insn_block
            .entries
            .iter()
            .filter(|entry| entry.supports(cpu))
            .collect::<Vec<_>>();
        if entries.is_empty() {
            continue;
        }

        println!("{}", insn_block.name);
        for entry in entries {
            println!(
                "  {:<36} {:<32} {}",
                entry.insn.format, entry.insn.code, entry.insn.abstr.replace('\n', "; ")
            );
        }
        println!();
    }
}

fn show(isa: &Isa, cpu: Option<SuperhVersion>, pattern: &str) -> Result<()> {
    let cpu = cpu.unwrap_or(SuperhVersion::ANY);
    let entries = isa
        .find(pattern)?
        .into_iter()
        .filter(|entry| entry.supports(cpu))
        .collect::<Vec<_>>();

    if entries.is_empty() {
        bail!("no instruction matches `{pattern}`");
    }

    for entry in entries {
        print_entry(entry, cpu);
        println!();
    }

    Ok(())
}

fn print_entry(entry: &Entry, cpu: SuperhVersion) {
    let insn = entry.insn;

    println!("{}", insn.format);
    println!("  {}", insn.abstr.replace('\n', "\n  "));
    println!("  encoding:     {}", insn.code);
    println!("  cpus:         {}", insn.environments);
    println!("  t bit:        {}", insn.t_bit);
    if let Some(group) = insn.group {
        println!("  issue group:  {group}");
    }
    for version in CPUS.into_iter().filter(|v| cpu.contains(*v) && entry.supports(*v)) {
        let (issue, latency) = insn.cycles_on(version);
        println!("  cycles ({version}): issue {issue}, latency {latency}");
    }
    if insn.privileged {
        println!("  privileged");
    }
    if insn.delay_slot {
        println!("  delayed branch");
    }
    if !insn.description.is_empty() {
        println!("\n  {}", insn.description);
    }
    if !insn.note.is_empty() {
        println!("\n  Note: {}", insn.note);
    }
    if !insn.operation.is_empty() {
        println!("\n  {}", insn.operation.replace('\n', "\n  "));
    }
    if !insn.example.is_empty() {
        println!("\n  {}", insn.example.replace('\n', "\n  "));
    }
    if !insn.exceptions.is_empty() {
        println!("\n  Exceptions:");
        for exception in insn.exceptions {
            println!("    {exception}");
        }
    }
    if !entry.citations.is_empty() {
        println!("\n  See:");
        for citation in &entry.citations {
            println!("    {citation}");
        }
    }
}

fn print_decoded(decoded: &[Decoded], data: &str) {
    let Some(first) = decoded.first() else {
        return;
    };
    let text = decoded
        .iter()
        .filter(|insn| insn.size == first.size)
        .map(|insn| insn.to_string())
        .collect::<Vec<_>>()
        .join("  ");
    println!("{:08x}:  {data:<10} {text}", first.address);
}

fn decode(isa: &Isa, words: &[u16], ctx: &DecodeContext) -> Result<()> {
    let decoded = isa.decode(words, ctx);
    if decoded.is_empty() {
        bail!("no {} instruction matches {:04x}", ctx.version, words[0]);
    }

    for insn in &decoded {
        let data = words
            .iter()
            .take(insn.size / 2)
            .map(|word| format!("{word:04x}"))
            .collect::<Vec<_>>()
            .join(" ");
        print_decoded(std::slice::from_ref(insn), &data);
    }

    Ok(())
}

fn disasm(isa: &Isa, data: &[u8], endianness: Endianness, ctx: &DecodeContext) {
    let mut offset = 0;

    while offset + 1 < data.len() {
        let address = ctx.address.wrapping_add(offset as u32);
        let decoded = decode_bytes(isa, &data[offset..], endianness, &ctx.at(address));

        let size = decoded.first().map_or(2, |insn| insn.size);
        let bytes = data[offset..offset + size]
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect::<String>();

        if decoded.is_empty() {
            println!("{address:08x}:  {bytes:<10} .word");
        } else {
            print_decoded(&decoded, &bytes);
        }

        offset += size;
    }

    if offset < data.len() {
        warn!("Ignoring trailing byte at offset {offset:#x}");
    }
}

fn check(isa: &Isa) -> Result<()> {
    let mut problems = 0;

    for entry in isa.entries() {
        if entry.citations.is_empty() {
            warn!("{} has no citation", entry.insn.format);
            problems += 1;
        }
    }

    for cpu in CPUS {
        for (a, b) in isa.ambiguities(cpu) {
            warn!(
                "{cpu}: `{}` ({}) overlaps `{}` ({})",
                a.insn.format, a.insn.code, b.insn.format, b.insn.code
            );
            problems += 1;
        }
    }

    if problems > 0 {
        bail!("{problems} problems found");
    }

    for manual in Manual::iter() {
        let cited = isa
            .entries()
            .filter(|entry| entry.citations.iter().any(|c| c.manual == manual))
            .count();
        println!("{:<36} {cited} instructions", manual.title());
    }

    println!(
        "{} instructions in {} blocks, all cited and unambiguous",
        isa.entries().count(),
        isa.blocks().len()
    );

    Ok(())
}
