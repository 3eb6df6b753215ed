use segment_raycaster::game::{poll_events, GameConfig, MoveInput, Scene};
use segment_raycaster::raycaster::Canvas;

fn main() {
    // Optional first argument: path to a JSON config
    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    // Initialize the Raylib window
    let (mut rl, thread) = raylib::init()
        .size(config.window_width, config.window_height)
        .title("Segment Raycaster")
        .build();

    rl.set_target_fps(config.target_fps);

    // Screen size is fixed for the whole run
    let screen_width = rl.get_screen_width();
    let screen_height = rl.get_screen_height();

    let seed = config.resolve_seed();
    let mut scene = Scene::new(screen_width, screen_height, &config, seed);
    let mut input = MoveInput::default();

    println!(
        "Screen {}x{}, map {}x{} with {} walls (seed {}), {} rays over {}°",
        screen_width,
        screen_height,
        config.map_width,
        config.map_height,
        scene.map().walls().len(),
        seed,
        config.num_rays,
        config.fov_degrees,
    );

    // Main loop
    while !rl.window_should_close() {
        for event in poll_events(&rl) {
            input.apply(event, config.turn_step, config.move_step);
        }

        scene.step(&input);

        // Dropping the draw handle presents the frame
        let mut d = rl.begin_drawing(&thread);
        Canvas::clear(&mut d);
        scene.draw(&mut d);
    }

    println!("Window closed, exiting");
}
