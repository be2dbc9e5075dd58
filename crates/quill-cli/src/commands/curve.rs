//! Curve commands: sample a figure and trace it

use anyhow::{Context, Result};
use quill::prelude::{Curve, Lissajous, RenderParams, Rose, Trochoid};

use crate::cli::{EngineArgs, LissajousArgs, RoseArgs, RouletteArgs, RouletteKind};

fn trace(curve: &dyn Curve, steps: usize, engine: &EngineArgs) -> Result<()> {
    let points = curve.compute(steps);
    log::info!("{}: {} points", curve.name(), points.len());
    super::draw(engine, RenderParams::default(), |pipeline| {
        pipeline.trace(&points)
    })
}

pub fn lissajous(args: &LissajousArgs) -> Result<()> {
    let curve =
        Lissajous::new(args.a, args.b, args.phase).context("Invalid Lissajous parameters")?;
    trace(&curve, args.points, &args.engine)
}

pub fn rose(args: &RoseArgs) -> Result<()> {
    let curve = Rose::new(args.n, args.d).context("Invalid rose parameters")?;
    trace(&curve, args.points, &args.engine)
}

pub fn roulette(args: &RouletteArgs) -> Result<()> {
    let (big_r, r) = (args.big_r, args.r);
    let curve = match args.kind {
        RouletteKind::Ht => Trochoid::hypotrochoid(big_r, r, args.d),
        RouletteKind::Et => Trochoid::epitrochoid(big_r, r, args.d),
        RouletteKind::Hc => Trochoid::hypocycloid(big_r, r),
        RouletteKind::Ec => Trochoid::epicycloid(big_r, r),
    }
    .context("Invalid roulette parameters")?;
    trace(&curve, args.points, &args.engine)
}
