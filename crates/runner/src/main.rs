use anyhow::Context;

use gilded_rose_inventory::GildedRose;

mod config;

use config::Config;

fn load(config: &Config) -> anyhow::Result<GildedRose> {
    match &config.items_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let app = GildedRose::from_json(&json)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(app)
        }
        None => Ok(GildedRose::with_seed_items()),
    }
}

fn main() -> anyhow::Result<()> {
    gilded_rose_observability::init();

    let config = Config::from_env()?;
    let mut app = load(&config)?;

    tracing::info!(items = app.items().len(), days = config.days, "starting simulation");

    for _ in 0..config.days {
        app.update_quality();
        app.check_invariants()
            .with_context(|| format!("after day {}", app.day()))?;

        for (item, category) in app.entries() {
            tracing::info!(
                day = app.day(),
                name = %item.name,
                %category,
                sell_in = item.sell_in,
                quality = item.quality,
                "item state"
            );
        }
    }

    println!("{}", serde_json::to_string_pretty(app.items())?);
    Ok(())
}
