//! Main-loop state machine tying the face, encoder, clock and storage together
//!
//! [`ClockApp::tick`] never blocks. It runs one iteration and returns how long
//! to wait before the next one, so the caller picks the sleep primitive.
//! [`ClockApp::run`] is the blocking loop for bare-metal targets.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use embassy_time::Duration;

use crate::OutputDriver;
use crate::clock_face::{ClockFace, TimeInDigits};
use crate::color::{BLACK, COLOR_CHOICES, ColorSettings, wrap_index};
use crate::encoder::{ButtonGesture, PollHandle};
use crate::pattern::{PatternId, PatternSlot};
use crate::persist::{ColorStore, read_config, write_config};
use crate::timekeeping::{MinuteWatch, Timekeeper};

/// Wait between two iterations while showing the time or editing colours
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Minutes per detent while adjusting hours
const MINUTES_PER_HOUR: i32 = 60;

/// What the face is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    #[default]
    DisplayTime,
    ChangeColor,
    Pattern,
}

/// Which colour the encoder is choosing in colour mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorTarget {
    Digit,
    Background,
}

/// In-progress colour selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEditor {
    target: ColorTarget,
    choice: usize,
    draft: ColorSettings,
}

impl ColorEditor {
    /// Start with the current digit colour on a black face
    pub const fn new(current: ColorSettings) -> Self {
        Self {
            target: ColorTarget::Digit,
            choice: 0,
            draft: ColorSettings::new(current.digit, BLACK),
        }
    }

    pub const fn target(&self) -> ColorTarget {
        self.target
    }

    pub const fn draft(&self) -> ColorSettings {
        self.draft
    }

    /// Walk the palette by `counts` and apply the choice to the current target
    pub fn rotate(&mut self, counts: i32) {
        self.choice = wrap_index(self.choice, counts, COLOR_CHOICES.len());
        let color = COLOR_CHOICES[self.choice];
        match self.target {
            ColorTarget::Digit => self.draft.digit = color,
            ColorTarget::Background => self.draft.background = color,
        }
    }
}

/// The clock application
pub struct ClockApp<'a, 't, O: OutputDriver, S: ColorStore> {
    // External dependencies
    face: ClockFace<'a, O>,
    encoder: PollHandle<'t>,
    time: &'t Timekeeper,
    store: S,

    // Internal state
    mode: Mode,
    hours_adjust: bool,
    minute_watch: MinuteWatch,
    editor: Option<ColorEditor>,
    pattern: PatternSlot,
}

impl<'a, 't, O: OutputDriver, S: ColorStore> ClockApp<'a, 't, O, S> {
    /// Create the app, loading the stored colours
    ///
    /// A missing or corrupt record falls back to [`ColorSettings::default`].
    pub fn new(
        mut face: ClockFace<'a, O>,
        encoder: PollHandle<'t>,
        time: &'t Timekeeper,
        mut store: S,
    ) -> Self {
        let colors = read_config(&mut store).unwrap_or_else(|_err| {
            #[cfg(feature = "esp32-log")]
            println!("[app] {}, using default colours", _err);
            ColorSettings::default()
        });
        face.prerender(colors);

        Self {
            face,
            encoder,
            time,
            store,
            mode: Mode::DisplayTime,
            hours_adjust: false,
            minute_watch: MinuteWatch::new(),
            editor: None,
            pattern: PatternSlot::default(),
        }
    }

    /// Run one loop iteration and return how long to wait before the next
    pub fn tick(&mut self) -> Duration {
        if self.encoder.take_press_occurred() {
            let gesture = self.encoder.take_button_state();
            if self.mode == Mode::ChangeColor {
                self.advance_color_editor();
            } else {
                self.dispatch(gesture);
            }
        }

        match self.mode {
            Mode::DisplayTime => self.display_time(),
            Mode::ChangeColor => self.edit_colors(),
            Mode::Pattern => self.play_pattern(),
        }
    }

    /// Tick forever, blocking between iterations
    pub fn run(&mut self) -> ! {
        loop {
            let hold = self.tick();
            embassy_time::block_for(hold);
        }
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether rotation currently moves the time by hours
    pub const fn hours_adjust(&self) -> bool {
        self.hours_adjust
    }

    pub const fn color_editor(&self) -> Option<&ColorEditor> {
        self.editor.as_ref()
    }

    pub fn pattern_id(&self) -> PatternId {
        self.pattern.id()
    }

    pub const fn face(&self) -> &ClockFace<'a, O> {
        &self.face
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    fn dispatch(&mut self, gesture: ButtonGesture) {
        match gesture {
            ButtonGesture::DoubleClick => match self.mode {
                Mode::Pattern => {
                    let colors = self.face.colors();
                    self.face.prerender(colors);
                    self.enter_display_time();
                }
                Mode::DisplayTime => self.enter_pattern(),
                Mode::ChangeColor => {}
            },
            ButtonGesture::Hold => self.enter_change_color(),
            ButtonGesture::ShortPress => {
                if self.mode == Mode::DisplayTime {
                    self.hours_adjust = !self.hours_adjust;
                }
            }
            ButtonGesture::Resting => self.enter_display_time(),
        }
    }

    fn enter_display_time(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[app] mode: display time");
        self.mode = Mode::DisplayTime;
        self.minute_watch.invalidate();
    }

    fn enter_pattern(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[app] mode: pattern {}", self.pattern.id().as_str());
        self.mode = Mode::Pattern;
        self.pattern.reset();
    }

    fn enter_change_color(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[app] mode: change colour");
        self.mode = Mode::ChangeColor;
        let _ = self.encoder.take_rotation_counts();

        let editor = ColorEditor::new(self.face.colors());
        self.face.clear_and_render();
        self.face.prerender(editor.draft());
        self.face.force_render(&TimeInDigits::ZERO);
        self.editor = Some(editor);
    }

    fn advance_color_editor(&mut self) {
        let Some(editor) = self.editor.as_mut() else {
            self.enter_display_time();
            return;
        };
        match editor.target {
            ColorTarget::Digit => editor.target = ColorTarget::Background,
            ColorTarget::Background => {
                let colors = editor.draft();
                self.editor = None;
                self.save_colors(colors);
                self.enter_display_time();
            }
        }
    }

    fn save_colors(&mut self, colors: ColorSettings) {
        if let Err(_err) = write_config(&mut self.store, colors) {
            #[cfg(feature = "esp32-log")]
            println!("[app] failed to store colours: {}", _err);
        }
        // The face keeps the new colours even if storing them failed
        self.face.prerender(colors);
    }

    fn display_time(&mut self) -> Duration {
        let counts = self.encoder.take_rotation_counts();
        if counts != 0 {
            let minutes = if self.hours_adjust {
                counts.saturating_mul(MINUTES_PER_HOUR)
            } else {
                counts
            };
            self.time.adjust_minutes(minutes);
        }

        let seconds = self.time.seconds();
        if self.minute_watch.changed(seconds) {
            self.face.render_time(&TimeInDigits::from_seconds(seconds));
        }
        POLL_INTERVAL
    }

    fn edit_colors(&mut self) -> Duration {
        let counts = self.encoder.take_rotation_counts();
        if counts != 0
            && let Some(editor) = self.editor.as_mut()
        {
            editor.rotate(counts);
            let draft = editor.draft();
            self.face.prerender(draft);
            self.face.force_render(&TimeInDigits::ZERO);
        }
        POLL_INTERVAL
    }

    fn play_pattern(&mut self) -> Duration {
        let counts = self.encoder.take_rotation_counts();
        if counts != 0 {
            let current = self.pattern.id().index();
            let next = wrap_index(current, counts, PatternId::ALL.len());
            self.pattern = PatternId::ALL[next].to_slot();
        }

        let hold = self.pattern.step(self.face.strip_mut());
        self.face.show();
        hold
    }
}
