use std::io::Write;

use snowdrift::{
    DualFieldGenerator, EpochClock, SingleFieldGenerator, SnowflakeGenerator, SnowflakeId, parse,
    parse2,
};

use crate::config::{Action, Discriminator, OutputFormat};

pub fn run(action: &Action, out: &mut impl Write) -> anyhow::Result<()> {
    match *action {
        Action::Generate {
            discriminator: Discriminator::Single(machine_id),
            count,
        } => generate(&SingleFieldGenerator::new(machine_id), count, out),
        Action::Generate {
            discriminator:
                Discriminator::Dual {
                    machine_id,
                    process_id,
                },
            count,
        } => generate(&DualFieldGenerator::new((machine_id, process_id)), count, out),
        Action::Parse { id, dual, format } => print_parsed(id, dual, format, out),
    }
}

fn generate<G, ID>(generator: &G, count: usize, out: &mut impl Write) -> anyhow::Result<()>
where
    G: SnowflakeGenerator<ID, EpochClock>,
    ID: SnowflakeId,
{
    tracing::debug!(count, "generating ids");
    for _ in 0..count {
        writeln!(out, "{}", generator.next_id())?;
    }
    out.flush()?;
    Ok(())
}

fn print_parsed(
    id: u64,
    dual: bool,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match (dual, format) {
        (false, OutputFormat::Text) => {
            let parsed = parse(id);
            writeln!(out, "Timestamp: {}", parsed.timestamp)?;
            writeln!(out, "Sequence: {}", parsed.sequence)?;
            writeln!(out, "Machine ID: {}", parsed.discriminator)?;
        }
        (true, OutputFormat::Text) => {
            let parsed = parse2(id);
            writeln!(out, "Timestamp: {}", parsed.timestamp)?;
            writeln!(out, "Sequence: {}", parsed.sequence)?;
            writeln!(out, "Machine ID: {}", parsed.discriminator1)?;
            writeln!(out, "Process ID: {}", parsed.discriminator2)?;
        }
        (false, OutputFormat::Json) => {
            serde_json::to_writer(&mut *out, &parse(id))?;
            writeln!(out)?;
        }
        (true, OutputFormat::Json) => {
            serde_json::to_writer(&mut *out, &parse2(id))?;
            writeln!(out)?;
        }
    }
    Ok(())
}
