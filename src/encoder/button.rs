use embassy_time::Duration;

/// Classified push-button interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonGesture {
    /// Nothing new since the last read
    #[default]
    Resting,
    ShortPress,
    DoubleClick,
    Hold,
}

/// Gesture thresholds, in counts of the free-running edge timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonThresholds {
    /// Press width above which a release is a hold
    pub long_press: u16,
    /// Release-to-release gap below which a release is a double click
    pub multi_click: u16,
    /// Gap after which the multi-click counter starts over
    pub multi_click_freshness: u16,
}

impl ButtonThresholds {
    /// Tick period of the Maverick board's edge timer
    pub const MAVERICK_TICK: Duration = Duration::from_micros(258);

    /// 2 s hold, 350 ms double click, 1 s freshness on the Maverick board
    pub const MAVERICK: Self = Self {
        long_press: 0x1E48,
        multi_click: 0x054D,
        multi_click_freshness: 0x0F24,
    };

    /// Convert wall-clock thresholds to timer counts
    ///
    /// Values that do not fit the 16-bit timer saturate.
    pub fn from_durations(
        long_press: Duration,
        multi_click: Duration,
        multi_click_freshness: Duration,
        tick: Duration,
    ) -> Self {
        Self {
            long_press: counts_for(long_press, tick),
            multi_click: counts_for(multi_click, tick),
            multi_click_freshness: counts_for(multi_click_freshness, tick),
        }
    }
}

impl Default for ButtonThresholds {
    fn default() -> Self {
        Self::MAVERICK
    }
}

fn counts_for(duration: Duration, tick: Duration) -> u16 {
    let counts = duration.as_micros() / tick.as_micros().max(1);
    u16::try_from(counts).unwrap_or(u16::MAX)
}

/// Edge-timestamp gesture classifier
///
/// Classification happens on release only. Timestamps come from a 16-bit
/// free-running counter and are compared with wrapping subtraction, so one
/// counter wrap between two edges is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    thresholds: ButtonThresholds,
    gesture: ButtonGesture,
    last_rise: u16,
    last_fall: Option<u16>,
    press_occurred: bool,
    multi_clicks: u16,
}

impl ButtonState {
    pub const fn new(thresholds: ButtonThresholds) -> Self {
        Self {
            thresholds,
            gesture: ButtonGesture::Resting,
            last_rise: 0,
            last_fall: None,
            press_occurred: false,
            multi_clicks: 0,
        }
    }

    /// Forget all edges while keeping the thresholds
    pub fn reset(&mut self) {
        *self = Self::new(self.thresholds);
    }

    /// Button went down
    pub fn on_press(&mut self, timestamp: u16) {
        self.last_rise = timestamp;
    }

    /// Button came up; classifies the interaction
    pub fn on_release(&mut self, timestamp: u16) -> ButtonGesture {
        let width = timestamp.wrapping_sub(self.last_rise);
        let gap = self.last_fall.map(|fall| timestamp.wrapping_sub(fall));

        if gap.is_none_or(|gap| gap > self.thresholds.multi_click_freshness) {
            self.multi_clicks = 0;
        }

        self.gesture = if width > self.thresholds.long_press {
            ButtonGesture::Hold
        } else if gap.is_some_and(|gap| gap < self.thresholds.multi_click) {
            self.multi_clicks = self.multi_clicks.saturating_add(1);
            ButtonGesture::DoubleClick
        } else {
            ButtonGesture::ShortPress
        };

        self.press_occurred = true;
        self.last_fall = Some(timestamp);
        self.gesture
    }

    /// Current classification, consumed
    pub fn take_gesture(&mut self) -> ButtonGesture {
        core::mem::take(&mut self.gesture)
    }

    /// Whether any release happened since the last call, consumed
    pub fn take_press_occurred(&mut self) -> bool {
        core::mem::take(&mut self.press_occurred)
    }

    pub const fn gesture(&self) -> ButtonGesture {
        self.gesture
    }

    /// Double clicks counted within the current freshness window
    pub const fn multi_clicks(&self) -> u16 {
        self.multi_clicks
    }

    pub const fn thresholds(&self) -> ButtonThresholds {
        self.thresholds
    }
}
