// SPDX: CC0-1.0

use anyhow::Context;
use chrono::{DateTime, Local};
use graph_calc::{
    shell, svg::SvgRenderer, Calculator, Number, Point, Session, Settings, Viewport,
};
use log::info;
use std::{
    fs::OpenOptions,
    io::{stdin, stdout, BufWriter, Write},
    process::ExitCode,
};

fn output_svg_filename(now: DateTime<Local>) -> String {
    format!(
        "{}_output-{}.{}",
        env!("CARGO_PKG_NAME"),
        now.format("%Y-%m-%d_%H-%M-%S"),
        "svg"
    )
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("unexpected error: {err}");
            let chain = err.chain();
            if chain.len() > 1 {
                eprintln!();
                eprintln!("context:");
                for it in chain.skip(1) {
                    eprintln!("  {it}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let settings = Settings::default();
    let mut inp = stdin().lock();
    let mut stdout = BufWriter::new(stdout());

    writeln!(
        stdout,
        "canvas is {}x{} pixels, (0,0) is the bottom-left corner",
        settings.width(),
        settings.height()
    )?;
    let origin: Point<Number> = shell::read_fromstr(
        &mut inp,
        &mut stdout,
        "Enter pixel coordinates of chart origin (x,y): ",
    )?;
    let ratio: Number =
        shell::read_fromstr(&mut inp, &mut stdout, "Enter ratio of pixels per step: ")?;
    let viewport = Viewport::new(origin, ratio).context("invalid chart configuration")?;
    settings
        .check_viewport(&viewport)
        .context("invalid chart configuration")?;

    let svg_path = output_svg_filename(Local::now());
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&svg_path)
        .context("failed to open output svg file")?;
    let canvas = SvgRenderer::new(BufWriter::new(file), &settings)
        .context("failed to write to output svg file")?;
    let mut session =
        Session::new(viewport, settings, canvas).context("invalid chart configuration")?;
    session
        .draw_axes()
        .context("failed to write to output svg file")?;

    let mut calc = Calculator::default();
    loop {
        let expr = match shell::input(&mut inp, &mut stdout, "Enter an arithmetic expression: ")? {
            Some(expr) if !expr.is_empty() => expr,
            _ => break,
        };

        if let Err(err) = calc.compile(&expr) {
            writeln!(stdout)?;
            shell::report_parse_err(&mut stdout, &err, &calc)?;
            writeln!(stdout)?;
            continue;
        }

        let idx = session.next_index();
        let stats = session
            .plot(&expr, &mut calc)
            .context("failed to write to output svg file")?;
        if stats.segments == 0 {
            writeln!(stdout, "note: '{expr}' is undefined across the whole chart")?;
        } else {
            info!("plotted {expr:?} as {idx}: {stats}");
        }
    }

    let mut file = session
        .into_renderer()
        .finish()
        .context("failed to write to output svg file")?;
    file.flush()?;
    file.get_mut()
        .sync_data()
        .context("failed to sync output svg file")?;
    writeln!(stdout, "chart written to {svg_path}")?;
    stdout.flush()?;
    Ok(())
}
