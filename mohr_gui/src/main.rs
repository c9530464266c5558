//! # Mohr GUI Application
//!
//! Desktop interface for the stress transformation calculator. The left
//! panel edits σx, σy, τxy and the rotation angle; the right panel shows the
//! results with two tabs, Mohr's circle and the rotated element. Every edit
//! recalculates immediately.

mod ui;

use std::path::{Path, PathBuf};

use clap::Parser;
use env_logger::Env;
use iced::widget::{column, container, row, Space};
use iced::{Element, Length, Task, Theme};
use log::{debug, warn};

use mohr_core::calculations::{analyze, AnalysisInput, AnalysisReport, StressState};
use mohr_core::input::ScalarField;
use mohr_core::units::StressUnit;
use mohr_core::{CalcError, CalcResult, Settings};

#[derive(Parser, Debug)]
#[command(name = "mohr_gui")]
#[command(about = "Mohr's circle and element rotation viewer", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (TOML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Width share of the input panel (the results panel takes the rest)
const INPUT_PANEL_RATIO: f32 = 0.3;

/// Results view tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsTab {
    #[default]
    MohrCircle,
    ElementRotation,
}

impl ResultsTab {
    pub const ALL: [ResultsTab; 2] = [ResultsTab::MohrCircle, ResultsTab::ElementRotation];

    pub fn display_name(&self) -> &'static str {
        match self {
            ResultsTab::MohrCircle => "Mohr's Circle",
            ResultsTab::ElementRotation => "Square Rotation",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(ScalarField, String),
    StressUnitSelected(StressUnit),
    SelectTab(ResultsTab),
    ToggleDarkMode,
    ExportJson,
}

pub struct App {
    pub settings: Settings,

    /// Raw text of the four inputs, in [`ScalarField::ALL`] order
    pub inputs: [String; 4],

    pub report: Option<AnalysisReport>,
    pub error_message: Option<String>,
    pub selected_tab: ResultsTab,
    pub dark_mode: bool,
    pub status: String,
}

impl App {
    fn new(settings: Settings) -> Self {
        let mut app = App {
            settings,
            inputs: ["100".to_string(), "20".to_string(), "30".to_string(), "0".to_string()],
            report: None,
            error_message: None,
            selected_tab: ResultsTab::default(),
            dark_mode: false,
            status: "Ready".to_string(),
        };
        app.recalculate();
        app
    }

    fn title(&self) -> String {
        "Mohr - Stress Transformation".to_string()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Text currently entered for `field`
    pub fn input(&self, field: ScalarField) -> &str {
        &self.inputs[field_index(field)]
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(field, value) => {
                self.inputs[field_index(field)] = value;
                self.recalculate();
            }
            Message::StressUnitSelected(unit) => {
                self.settings.stress_unit = unit;
            }
            Message::SelectTab(tab) => {
                self.selected_tab = tab;
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
            Message::ExportJson => self.export_json(),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let header = ui::toolbar::view_header_owned(self.title());
        let toolbar = ui::toolbar::view_toolbar(self.dark_mode, self.report.is_some());

        let panels = row![
            ui::input_panel::view_input_panel(self, INPUT_PANEL_RATIO),
            Space::new().width(10),
            ui::results_panel::view_results_panel(self, INPUT_PANEL_RATIO),
        ]
        .height(Length::Fill);

        let content = column![
            header,
            toolbar,
            panels,
            ui::status_bar::view_status_bar(&self.status),
        ]
        .spacing(6)
        .padding(10);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Parse the inputs and rerun the analysis.
    fn recalculate(&mut self) {
        match self.parse_inputs().and_then(|input| analyze(&input)) {
            Ok(report) => {
                self.report = Some(report);
                self.error_message = None;
            }
            Err(e) => {
                debug!("analysis failed: {}", e);
                self.report = None;
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn parse_inputs(&self) -> CalcResult<AnalysisInput> {
        let mut values = [0.0; 4];
        for (value, field) in values.iter_mut().zip(ScalarField::ALL) {
            *value = field.parse(self.input(field))?;
        }
        let [sigma_x, sigma_y, tau_xy, angle_deg] = values;
        Ok(AnalysisInput::with_settings(
            StressState::new(sigma_x, sigma_y, tau_xy),
            angle_deg,
            &self.settings,
        ))
    }

    fn export_json(&mut self) {
        let Some(report) = &self.report else {
            self.status = "Nothing to export".to_string();
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("mohr_report.json")
            .save_file()
        else {
            return;
        };

        self.status = match export_report(report, &path) {
            Ok(()) => format!("Exported {}", path.display()),
            Err(e) => {
                warn!("export failed: {}", e);
                format!("Export failed: {}", e)
            }
        };
    }
}

fn field_index(field: ScalarField) -> usize {
    match field {
        ScalarField::SigmaX => 0,
        ScalarField::SigmaY => 1,
        ScalarField::TauXy => 2,
        ScalarField::AngleDeg => 3,
    }
}

/// Write `report` as pretty JSON to `path`
fn export_report(report: &AnalysisReport, path: &Path) -> CalcResult<()> {
    let json = report.to_json_pretty()?;
    std::fs::write(path, json)
        .map_err(|e| CalcError::file_error("write", path.display().to_string(), e.to_string()))
}

fn main() -> iced::Result {
    let cli = Cli::parse();

    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    let settings = match Settings::load_or_default(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    iced::application(move || App::new(settings.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size((1100.0, 720.0))
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_has_report() {
        let app = App::new(Settings::default());
        let report = app.report.as_ref().unwrap();
        assert!((report.mohr_circle.circle.radius - 50.0).abs() < 1e-9);
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_edit_recalculates() {
        let mut app = App::new(Settings::default());
        let _ = app.update(Message::InputChanged(ScalarField::TauXy, "0".to_string()));
        let report = app.report.as_ref().unwrap();
        assert!((report.mohr_circle.circle.radius - 40.0).abs() < 1e-9);
        assert_eq!(app.input(ScalarField::TauXy), "0");
    }

    #[test]
    fn test_invalid_text_shows_error() {
        let mut app = App::new(Settings::default());
        let _ = app.update(Message::InputChanged(ScalarField::AngleDeg, "abc".to_string()));
        assert!(app.report.is_none());
        assert!(app.error_message.as_deref().unwrap().contains("angle_deg"));

        let _ = app.update(Message::InputChanged(ScalarField::AngleDeg, "45".to_string()));
        assert!(app.report.is_some());
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_tabs_and_theme() {
        let mut app = App::new(Settings::default());
        let _ = app.update(Message::SelectTab(ResultsTab::ElementRotation));
        assert_eq!(app.selected_tab, ResultsTab::ElementRotation);

        let _ = app.update(Message::ToggleDarkMode);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn test_unit_selection_updates_settings() {
        let mut app = App::new(Settings::default());
        let _ = app.update(Message::StressUnitSelected(StressUnit::MPa));
        assert_eq!(app.settings.stress_unit, StressUnit::MPa);
    }

    #[test]
    fn test_export_report() {
        let app = App::new(Settings::default());
        let path = std::env::temp_dir().join(format!("mohr_gui_export_{}.json", std::process::id()));
        export_report(app.report.as_ref().unwrap(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["mohr_circle"]["circle"]["center"]["x"], 60.0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_field_index_matches_prompt_order() {
        for (i, field) in ScalarField::ALL.iter().enumerate() {
            assert_eq!(field_index(*field), i);
        }
    }
}
