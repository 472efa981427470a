use std::io::Write;

use anyhow::Result;

use crate::terminal::{Command, Console, Control};

#[cfg(feature = "gui")]
const LINK: &str = "https://youtu.be/xvFZjo5PgG0";

/// Opens a small window with a single button. Blocks the terminal until the
/// window is closed.
pub struct WindowCommand;

impl Command for WindowCommand {
    #[cfg(feature = "gui")]
    fn on_command(&mut self, console: &mut Console<'_>, _args: Option<&[&str]>) -> Result<Control> {
        if let Err(error) = gui::show() {
            log::error!("Window failed: {error:?}");
            writeln!(console.err, "Could not open a window: {error}")?;
        }
        Ok(Control::Continue)
    }

    #[cfg(not(feature = "gui"))]
    fn on_command(&mut self, console: &mut Console<'_>, _args: Option<&[&str]>) -> Result<Control> {
        writeln!(console.err, "Windows are not supported in this build!")?;
        Ok(Control::Continue)
    }

    fn name(&self) -> &str {
        "window"
    }

    fn description(&self) -> &str {
        "opens a window..."
    }
}

#[cfg(feature = "gui")]
mod gui {
    use eframe::{egui, epaint::Vec2};
    use log::{error, info};

    use super::LINK;

    const SIZE: [f32; 2] = [400.0, 150.0];

    #[derive(Default)]
    struct LinkWindow;

    impl eframe::App for LinkWindow {
        fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 2.0 - 12.0);
                    let button = egui::Button::new("Click me").min_size(Vec2::new(80.0, 24.0));
                    if ui.add(button).clicked() {
                        info!("Opening {LINK}");
                        if let Err(err) = webbrowser::open(LINK) {
                            error!("Could not open the browser: {err}");
                        }
                    }
                });
            });
        }
    }

    pub fn show() -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(SIZE)
                .with_resizable(false),
            ..Default::default()
        };
        eframe::run_native(
            "A window",
            options,
            Box::new(|_cc| Box::new(LinkWindow)),
        )
    }
}
