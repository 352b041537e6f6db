use anyhow::{Context, Result, bail};
use castellan_core::{Board, Move, RulesConfig, divide};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line options: a starting position, rule switches and the moves to play.
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    /// One-line position text; the standard start when absent.
    position: Option<String>,
    /// Enforce turn order.
    strict: bool,
    /// Print a perft breakdown of the final position to this depth.
    perft: Option<usize>,
    /// Moves in coordinate notation, applied in order.
    moves: Vec<Move>,
}

fn parse_args<I>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--position" => {
                let text = args.next().context("--position needs a value")?;
                opts.position = Some(text);
            }
            "--strict" => opts.strict = true,
            "--perft" => {
                let depth = args.next().context("--perft needs a depth")?;
                opts.perft = Some(
                    depth
                        .parse()
                        .with_context(|| format!("invalid perft depth: {depth}"))?,
                );
            }
            flag if flag.starts_with("--") => bail!("unknown option: {flag}"),
            text => {
                let mv = Move::from_coordinate(text)
                    .with_context(|| format!("invalid move: {text}"))?;
                opts.moves.push(mv);
            }
        }
    }
    Ok(opts)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = parse_args(std::env::args().skip(1))?;

    let board = match &opts.position {
        Some(text) => text
            .parse::<Board>()
            .with_context(|| format!("invalid position: {text}"))?,
        None => Board::starting_position(),
    };
    let config = if opts.strict {
        RulesConfig::strict()
    } else {
        RulesConfig::default()
    };
    let mut board = board.with_config(config);
    info!(position = %board, strict = opts.strict, "castellan starting");

    for &mv in &opts.moves {
        if let Err(err) = board.try_add_move(mv) {
            warn!(%mv, error = %err, "move rejected");
            bail!("move {mv} rejected: {err}");
        }
        info!(%mv, position = %board, "move applied");
    }

    println!("{board}");
    println!("{}", board.pretty());
    println!("status: {:?}", board.status());

    if let Some(depth) = opts.perft {
        let split = divide(&board, depth);
        let total: u64 = split.iter().map(|(_, n)| n).sum();
        for (mv, nodes) in split {
            println!("{mv}: {nodes}");
        }
        println!("nodes: {total}");
    }

    Ok(())
}
