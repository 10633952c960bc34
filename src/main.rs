use bevy::prelude::*;
use clap::Parser;
use flickering_light::{
    cli::Cli,
    demo::DemoConfig,
    demo_plugin,
    flicker::FlickerRng,
    flicker_plugin,
};

fn main() {
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => FlickerRng::seeded(seed),
        None => FlickerRng::from_entropy(),
    };

    App::new()
        .add_plugins(DefaultPlugins)
        .insert_resource(rng)
        .insert_resource(DemoConfig {
            settings: cli.flicker_settings(),
            lamps: cli.lamps,
        })
        .add_plugins((flicker_plugin, demo_plugin))
        .run();
}

#[cfg(test)]
mod tests {
    use super::*;
    use flickering_light::prelude::*;

    #[test]
    fn test_demo_config_from_cli() {
        let cli = Cli::parse_from(["flickering-light", "--lamps", "5", "--base-intensity", "1000"]);
        let config = DemoConfig {
            settings: cli.flicker_settings(),
            lamps: cli.lamps,
        };

        assert_eq!(config.lamps, 5);
        assert_eq!(config.settings.base_intensity, 1000.0);
    }

    #[test]
    fn test_plugins_keep_cli_resources_and_drive_lamps() {
        let cli = Cli::parse_from(["flickering-light", "--seed", "9", "--lamps", "4"]);

        // Same wiring as main, without the windowed DefaultPlugins.
        let mut app = App::new();
        app.add_plugins((
            bevy::time::TimePlugin::default(),
            bevy::input::InputPlugin::default(),
        ));
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<StandardMaterial>>();
        app.add_message::<AppExit>();
        app.insert_resource(FlickerRng::seeded(cli.seed.unwrap()))
            .insert_resource(DemoConfig {
                settings: cli.flicker_settings(),
                lamps: cli.lamps,
            })
            .add_plugins((flicker_plugin, demo_plugin));

        app.update();

        assert_eq!(app.world().resource::<DemoConfig>().lamps, 4);
        assert!(app.world().contains_resource::<FlickerRng>());

        let active = app
            .world_mut()
            .query::<&FlickerController>()
            .iter(app.world())
            .filter(|controller| controller.is_active())
            .count();
        assert_eq!(active, 4);

        let lamps = app.world_mut().query::<&Lamp>().iter(app.world()).count();
        let bulbs = app.world_mut().query::<&LampBulb>().iter(app.world()).count();
        assert_eq!((lamps, bulbs), (4, 3));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = FlickerRng::seeded(1234);
        let mut b = FlickerRng::seeded(1234);
        for _ in 0..100 {
            let x = a.range(0.3, 1.2);
            assert_eq!(x, b.range(0.3, 1.2));
            assert!(x >= 0.3 && x <= 1.2);
        }
    }
}
