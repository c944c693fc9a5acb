use eframe::egui;
use tokio::runtime::Runtime;
use tracing::debug;
use weatherpane_core::{Notification, Severity, ViewState, WeatherFetcher};

/// The whole window state: URL input, the four display fields, and an
/// optional pending dialog.
pub struct WeatherPaneApp {
    runtime: Runtime,
    fetcher: WeatherFetcher,
    url: String,
    view: ViewState,
    dialog: Option<Notification>,
}

impl WeatherPaneApp {
    pub fn new() -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            runtime,
            fetcher: WeatherFetcher::new(),
            url: String::new(),
            view: ViewState::default(),
            dialog: None,
        })
    }

    /// One fetch cycle. Blocks the UI thread until the request finishes;
    /// one button, one request, no overlap.
    fn fetch_weather(&mut self) {
        match self.runtime.block_on(self.fetcher.fetch(&self.url)) {
            Ok(snapshot) => {
                debug!(?snapshot, "rendering snapshot");
                self.view = ViewState::render(&snapshot);
            }
            Err(failure) => {
                // Display fields keep their previous content.
                self.dialog = Some(Notification::for_failure(&failure));
            }
        }
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.dialog.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(dialog.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let color = match dialog.severity {
                    Severity::Error => ui.visuals().error_fg_color,
                    Severity::Warning => ui.visuals().warn_fg_color,
                    Severity::Info => ui.visuals().text_color(),
                };
                ui.colored_label(color, &dialog.message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.dialog = None;
        }
    }
}

impl eframe::App for WeatherPaneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Enter API URL:");
                ui.add(egui::TextEdit::singleline(&mut self.url).desired_width(f32::INFINITY));
            });

            ui.add_space(4.0);
            if ui.button("Fetch Weather").clicked() {
                self.fetch_weather();
            }

            ui.separator();
            ui.label(&self.view.temperature);
            ui.label(&self.view.description);
            ui.label(&self.view.humidity);
            ui.label(&self.view.wind_speed);
        });

        self.show_dialog(ctx);
    }
}
