use macroquad::prelude::*;
use aging_life::{
    CellColors, GameState, GridLayout,
    application::DEFAULT_SEEDS,
    ui, rendering, input,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life - Aging Cells".to_owned(),
        window_width: ui::WINDOW_WIDTH,
        window_height: ui::WINDOW_HEIGHT,
        // The grid is sized once from the first viewport
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let layout = GridLayout::from_viewport(ui::grid_area_width(), ui::grid_area_height());
    log::info!(
        "grid {}x{} with {:.1}px cells",
        layout.rows,
        layout.cols,
        layout.cell_size
    );

    let mut state = GameState::new(layout.rows, layout.cols);
    let mut colors = CellColors::new(&state.grid);
    let placed = state.seed(DEFAULT_SEEDS, &mut colors);
    log::info!("seeded {placed} of {} patterns", DEFAULT_SEEDS.len());

    let mut rng = ::rand::rng();

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(&state);

        state = input::process_button_clicks(state, &buttons, mouse_pos);
        input::handle_mouse_paint(&mut state, &layout, mouse_pos);
        state = input::process_keyboard_input(state);

        state.update(get_frame_time(), &mut rng, &mut colors);

        clear_background(BLACK);
        rendering::draw_grid(&colors, &layout);
        rendering::draw_controls(&state, &buttons, mouse_pos);

        next_frame().await;
    }
}
