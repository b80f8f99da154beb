use anyhow::Context;
use log::info;

use raptor_maze::{MazeConfig, MazeService};

fn parse_dims() -> anyhow::Result<MazeConfig> {
    let mut args = std::env::args().skip(1);

    let config = match (args.next(), args.next()) {
        (None, _) => MazeConfig::default(),
        (Some(rows), Some(columns)) => {
            let rows = rows.parse().context("rows must be a number")?;
            let columns = columns.parse().context("columns must be a number")?;
            MazeConfig::with_dims(rows, columns)
        }
        (Some(_), None) => anyhow::bail!("usage: raptor-maze [ROWS COLS]"),
    };
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = parse_dims()?;
    let service = MazeService::new(config).context("invalid maze configuration")?;

    info!(
        "generating {}x{} maze",
        service.config().rows,
        service.config().columns
    );
    let maze = service.generate().context("maze generation failed")?;

    maze.write_to(&mut std::io::stdout().lock())
        .context("failed to write maze")?;
    Ok(())
}
