use std::time::Duration;

use prep_core::model::WizardVariant;

use crate::error::SettingsError;

/// Default spacing of elapsed-time ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Default delay after which a personality call ends on its own.
pub const DEFAULT_PERSONALITY_AUTO_END: Duration = Duration::from_secs(10);

/// Timer knobs for a guided session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    tick_interval: Duration,
    auto_end_after: Option<Duration>,
}

impl SessionSettings {
    /// # Errors
    ///
    /// Returns `SettingsError` if either duration is zero.
    pub fn new(
        tick_interval: Duration,
        auto_end_after: Option<Duration>,
    ) -> Result<Self, SettingsError> {
        if tick_interval.is_zero() {
            return Err(SettingsError::ZeroTickInterval);
        }
        if let Some(delay) = auto_end_after.filter(|delay| delay.is_zero()) {
            return Err(SettingsError::ZeroAutoEnd(delay));
        }
        Ok(Self {
            tick_interval,
            auto_end_after,
        })
    }

    /// Defaults per variant: language calls run until ended by the user,
    /// personality calls end on their own after ten seconds.
    #[must_use]
    pub fn for_variant(variant: WizardVariant) -> Self {
        let auto_end_after = match variant {
            WizardVariant::Language => None,
            WizardVariant::Personality => Some(DEFAULT_PERSONALITY_AUTO_END),
        };
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            auto_end_after,
        }
    }

    /// # Errors
    ///
    /// Returns `SettingsError::ZeroAutoEnd` for a zero delay.
    pub fn with_auto_end_after(
        self,
        auto_end_after: Option<Duration>,
    ) -> Result<Self, SettingsError> {
        Self::new(self.tick_interval, auto_end_after)
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    #[must_use]
    pub fn auto_end_after(&self) -> Option<Duration> {
        self.auto_end_after
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_defaults() {
        let language = SessionSettings::for_variant(WizardVariant::Language);
        assert_eq!(language.auto_end_after(), None);
        assert_eq!(language.tick_interval(), Duration::from_secs(1));

        let personality = SessionSettings::for_variant(WizardVariant::Personality);
        assert_eq!(personality.auto_end_after(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn zero_durations_are_rejected() {
        assert_eq!(
            SessionSettings::new(Duration::ZERO, None),
            Err(SettingsError::ZeroTickInterval)
        );
        assert_eq!(
            SessionSettings::for_variant(WizardVariant::Language)
                .with_auto_end_after(Some(Duration::ZERO)),
            Err(SettingsError::ZeroAutoEnd(Duration::ZERO))
        );
    }
}
