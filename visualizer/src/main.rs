use ecgcore::normalize::{DisplayModel, RiskTier};
use ecgcore::render::RenderedStrip;
use iced::{
    mouse, time,
    widget::{
        button,
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, row, scrollable, text, text_input, Column, Container,
    },
    Alignment, Color, Element, Length, Point, Rectangle, Renderer, Size, Subscription, Task, Theme,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

fn main() -> iced::Result {
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Visualizer) -> String {
    "ECG Result Viewer".into()
}

fn application_subscription(_: &Visualizer) -> Subscription<Message> {
    time::every(Duration::from_secs(1)).map(|_| Message::Tick)
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Light
}

#[derive(Debug)]
struct Visualizer {
    form: ScenarioForm,
    screen: Option<ScreenPayload>,
    status: String,
    history: Vec<String>,
}

#[derive(Debug, Clone)]
enum Message {
    Tick,
    ScreenFetched(Result<ScreenPayload, String>),
    FormFieldChanged(FormField, String),
    SubmitScenario,
    ScenarioSubmitted(Result<String, String>),
}

#[derive(Debug, Clone, Copy)]
enum FormField {
    Bpm,
    SamplesPerLead,
    Noise,
    Seed,
    Prediction,
    Confidence,
    Description,
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        (
            Visualizer {
                form: ScenarioForm::default(),
                screen: None,
                status: "Waiting for analysis results...".into(),
                history: Vec::new(),
            },
            Task::perform(fetch_screen(), Message::ScreenFetched),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => Task::perform(fetch_screen(), Message::ScreenFetched),
            Message::ScreenFetched(Ok(screen)) => {
                if let Some(display) = &screen.display {
                    state.status = format!(
                        "Screen received: {} bpm / {} / {}",
                        display.heart_rate_bpm, display.rhythm_label, display.risk_tier
                    );
                    state.push_history(format!(
                        "Screen: {} bpm, quality {}%",
                        display.heart_rate_bpm, display.quality_percent
                    ));
                } else {
                    state.status = "No analysis results yet".into();
                }
                state.screen = Some(screen);
                Task::none()
            }
            Message::ScreenFetched(Err(err)) => {
                state.status = format!("Bridge error: {err}");
                Task::none()
            }
            Message::FormFieldChanged(field, value) => {
                state.form.update_field(field, value);
                Task::none()
            }
            Message::SubmitScenario => {
                let payload = state.form.to_payload();
                Task::perform(post_scenario(payload), Message::ScenarioSubmitted)
            }
            Message::ScenarioSubmitted(Ok(message)) => {
                state.status = message;
                state.push_history("Scenario submitted".into());
                Task::none()
            }
            Message::ScenarioSubmitted(Err(err)) => {
                state.status = format!("Scenario error: {err}");
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let form_column = column![
            text("Scenario Config").size(26),
            text_input("BPM", &state.form.bpm)
                .on_input(|value| Message::FormFieldChanged(FormField::Bpm, value))
                .padding(6),
            text_input("Samples per lead", &state.form.samples_per_lead)
                .on_input(|value| Message::FormFieldChanged(FormField::SamplesPerLead, value))
                .padding(6),
            text_input("Noise", &state.form.noise)
                .on_input(|value| Message::FormFieldChanged(FormField::Noise, value))
                .padding(6),
            text_input("Seed", &state.form.seed)
                .on_input(|value| Message::FormFieldChanged(FormField::Seed, value))
                .padding(6),
            text_input("Prediction", &state.form.prediction)
                .on_input(|value| Message::FormFieldChanged(FormField::Prediction, value))
                .padding(6),
            text_input("Confidence (%)", &state.form.confidence)
                .on_input(|value| Message::FormFieldChanged(FormField::Confidence, value))
                .padding(6),
            text_input("Description", &state.form.description)
                .on_input(|value| Message::FormFieldChanged(FormField::Description, value))
                .padding(6),
            button("POST scenario")
                .on_press(Message::SubmitScenario)
                .padding(10),
            text(&state.status).size(14),
            column![
                text("Parameter definitions").size(16),
                text("BPM: simulated heart rate carried into the analysis result.").size(12),
                text("Samples per lead: raw recording length before the 400-sample display window.")
                    .size(12),
                text("Noise: generator jitter amplitude, simulating electrode noise.").size(12),
                text("Seed: deterministic PRNG seeding so sessions replay consistently.").size(12),
                text("Prediction: rhythm class label; anything but Normal maps to High Risk.")
                    .size(12),
                text("Confidence: classifier confidence, shown as the quality percentage.")
                    .size(12),
                text("Description: free-text note included in the ingest response.").size(12),
            ]
            .spacing(4)
            .padding(6),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fixed(360.0));

        let metric_row = if let Some(display) = state.screen.as_ref().and_then(|s| s.display.as_ref())
        {
            row![
                metric_box(display.heart_rate_bpm.to_string(), "BPM"),
                metric_box(display.rhythm_label.clone(), "Rhythm"),
                metric_box(format!("{}%", display.quality_percent), "Quality"),
            ]
            .spacing(20)
        } else {
            row![text("Metrics: n/a").size(18)]
        };

        let strip_column = match &state.screen {
            Some(screen) if !screen.strips.is_empty() => screen.strips.iter().cloned().fold(
                Column::new().spacing(6),
                |col, strip| {
                    let height = strip.height_px as f32;
                    col.push(
                        Canvas::new(LeadStrip { strip })
                            .width(Length::Fill)
                            .height(Length::Fixed(height)),
                    )
                },
            ),
            _ => Column::new().push(
                text("No analysis results. Submit a scenario to run a measurement.").size(14),
            ),
        };

        let risk_tier = state
            .screen
            .as_ref()
            .and_then(|screen| screen.display.as_ref())
            .map(|display| display.risk_tier);
        let risk_meter = Canvas::new(RiskMeter { tier: risk_tier })
            .width(Length::Fill)
            .height(Length::Fixed(24.0));
        let risk_labels = row![
            text("Low Risk").size(14).width(Length::Fill),
            text("Medium Risk").size(14).width(Length::Fill),
            text("High Risk").size(14),
        ];

        let notes = state
            .screen
            .as_ref()
            .map(|screen| screen.notes.clone())
            .unwrap_or_default();
        let notes_list = if notes.is_empty() {
            Column::new().push(text("No technical details yet").size(14))
        } else {
            notes
                .iter()
                .fold(Column::new().spacing(4), |col, note| {
                    col.push(text(note.clone()).size(14))
                })
        };

        let history_list = if state.history.is_empty() {
            Column::new().push(text("No activity yet").size(12))
        } else {
            state
                .history
                .iter()
                .rev()
                .fold(Column::new().spacing(4), |col, entry| {
                    col.push(text(entry.clone()).size(12))
                })
        };

        let screen_column = column![
            text("Result ECG").size(26),
            strip_column,
            metric_row,
            text("Heart Risk Assessment").size(18),
            risk_meter,
            risk_labels,
            text("Technical details").size(16),
            Container::new(scrollable(notes_list).height(Length::Fixed(120.0))).padding(6),
            text("Activity log").size(16),
            Container::new(scrollable(history_list).height(Length::Fixed(90.0))).padding(6),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fill);

        let layout = row![form_column, screen_column]
            .spacing(20)
            .align_y(Alignment::Start)
            .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > 20 {
            self.history.remove(0);
        }
    }
}

fn metric_box(value: String, label: &str) -> Column<'_, Message> {
    column![text(value).size(30), text(label.to_string()).size(14)]
        .spacing(2)
        .align_x(Alignment::Center)
}

async fn fetch_screen() -> Result<ScreenPayload, String> {
    let response = reqwest::get("http://127.0.0.1:9000/screen")
        .await
        .map_err(|e| e.to_string())?;
    response
        .json::<ScreenPayload>()
        .await
        .map_err(|e| e.to_string())
}

async fn post_scenario(config: ScenarioConfig) -> Result<String, String> {
    let client = reqwest::Client::new();
    let response = client
        .post("http://127.0.0.1:9000/ingest-config")
        .json(&config)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status().is_success() {
        Ok("Scenario submitted".into())
    } else {
        let status = response.status();
        let text = response.text().await.unwrap_or_else(|_| "".into());
        Err(format!("{}: {}", status, text))
    }
}

#[derive(Debug, Clone)]
struct ScenarioForm {
    bpm: String,
    samples_per_lead: String,
    noise: String,
    seed: String,
    prediction: String,
    confidence: String,
    description: String,
}

impl Default for ScenarioForm {
    fn default() -> Self {
        Self {
            bpm: "72".into(),
            samples_per_lead: "1000".into(),
            noise: "0.05".into(),
            seed: "0".into(),
            prediction: "Normal".into(),
            confidence: "93".into(),
            description: "Rust visualizer scenario".into(),
        }
    }
}

impl ScenarioForm {
    fn update_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Bpm => self.bpm = value,
            FormField::SamplesPerLead => self.samples_per_lead = value,
            FormField::Noise => self.noise = value,
            FormField::Seed => self.seed = value,
            FormField::Prediction => self.prediction = value,
            FormField::Confidence => self.confidence = value,
            FormField::Description => self.description = value,
        }
    }

    fn to_payload(&self) -> ScenarioConfig {
        ScenarioConfig {
            bpm: self.bpm.parse().ok(),
            samples_per_lead: self.samples_per_lead.parse().ok(),
            noise: self.noise.parse().ok(),
            seed: self.seed.parse().ok(),
            prediction: if self.prediction.trim().is_empty() {
                None
            } else {
                Some(self.prediction.clone())
            },
            confidence: self.confidence.parse().ok(),
            description: if self.description.trim().is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
        }
    }
}

/// Subset of the bridge's generator config; absent fields keep the bridge
/// defaults, so every field is skipped when unset.
#[derive(Debug, Serialize)]
struct ScenarioConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    bpm: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    samples_per_lead: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    noise: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prediction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ScreenPayload {
    #[serde(default)]
    display: Option<DisplayModel>,
    #[serde(default)]
    strips: Vec<RenderedStrip>,
    #[serde(default)]
    notes: Vec<String>,
}

#[derive(Clone)]
struct LeadStrip {
    strip: RenderedStrip,
}

impl canvas::Program<Message> for LeadStrip {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(1.0, 0.93, 0.93),
        );

        if self.strip.show_axis_grid {
            let cell = 20.0;
            let grid_color = Color::from_rgba(1.0, 0.0, 0.0, 0.12);
            let grid = Path::new(|builder| {
                let mut x = 0.0;
                while x <= bounds.width {
                    builder.move_to(Point::new(x, 0.0));
                    builder.line_to(Point::new(x, bounds.height));
                    x += cell;
                }
                let mut y = 0.0;
                while y <= bounds.height {
                    builder.move_to(Point::new(0.0, y));
                    builder.line_to(Point::new(bounds.width, y));
                    y += cell;
                }
            });
            frame.stroke(&grid, Stroke::default().with_color(grid_color).with_width(1.0));
        }

        if self.strip.window.len() > 1 {
            let midline = bounds.height / 2.0;
            let scale = self.strip.scale;
            let trace = Path::new(|builder| {
                for (index, value) in self.strip.window.iter().enumerate() {
                    let x = index as f32 * scale.px_per_sample;
                    let y = (midline - value * scale.px_per_unit).clamp(0.0, bounds.height);
                    if index == 0 {
                        builder.move_to(Point::new(x, y));
                    } else {
                        builder.line_to(Point::new(x, y));
                    }
                }
            });

            let color = self.strip.color;
            frame.stroke(
                &trace,
                Stroke::default()
                    .with_width(1.5)
                    .with_color(Color::from_rgb8(color.r, color.g, color.b)),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[derive(Clone)]
struct RiskMeter {
    tier: Option<RiskTier>,
}

impl canvas::Program<Message> for RiskMeter {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let track_height = 14.0_f32.min(bounds.height);
        let track_top = (bounds.height - track_height) / 2.0;
        frame.fill_rectangle(
            Point::new(0.0, track_top),
            Size::new(bounds.width, track_height),
            Color::from_rgb(0.91, 0.93, 0.94),
        );

        // Indicator widths mirror the legacy meter: 30 / 60 / 90 percent.
        if let Some(tier) = self.tier {
            let (fraction, color) = match tier {
                RiskTier::Low => (0.3, Color::from_rgb8(0x42, 0x85, 0xf4)),
                RiskTier::Medium => (0.6, Color::from_rgb8(0xfb, 0xbc, 0x05)),
                RiskTier::High => (0.9, Color::from_rgb8(0xea, 0x43, 0x35)),
            };
            frame.fill_rectangle(
                Point::new(0.0, track_top),
                Size::new(bounds.width * fraction, track_height),
                color,
            );
        }

        vec![frame.into_geometry()]
    }
}
