use cover_odds::prelude::*;
use cover_odds_examples::{
    init_tracing, render_evaluation_to_png, render_evaluation_to_text, HeatmapConfig,
};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = HeatmapConfig::default();

    for id in ScenarioId::ALL {
        let session = Session::new(id);
        let evaluation = session.evaluate();

        println!("{} ({}):", id, id.label());
        for (i, spec) in id.objects().iter().enumerate() {
            println!(
                "  object {}: {}x{}, {} total",
                i + 1,
                spec.width,
                spec.height,
                spec.total_count
            );
        }
        println!("{}", render_evaluation_to_text(&evaluation, session.opened()));

        let out = format!("scenario-{id}.png");
        render_evaluation_to_png(&evaluation, session.opened(), &config, &out)?;
    }

    Ok(())
}
