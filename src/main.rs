//! Progress HUD demo
//! An iced window with a control panel and the HUD drawn over it

mod app;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(app::WINDOW_SIZE)
        .antialiasing(true)
        .run()
}
