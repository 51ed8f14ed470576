/// Minutes component of a recurrence interval.
///
/// Mirrors the contract's enum; discriminants are ABI values, not minute
/// counts. `Ignore` is the contract's "unset" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum IntervalMinutes {
    One = 0,
    Two = 1,
    Five = 2,
    Ten = 3,
    Fifteen = 4,
    Twenty = 5,
    TwentyFive = 6,
    Thirty = 7,
    ThirtyFive = 8,
    Forty = 9,
    FortyFive = 10,
    Fifty = 11,
    FiftyFive = 12,
    Sixty = 13,
    Ignore = 14,
}

/// Hours component of a recurrence interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum IntervalHours {
    Zero = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Eleven = 11,
    Twelve = 12,
    Thirteen = 13,
    Fourteen = 14,
    Fifteen = 15,
    Sixteen = 16,
    Seventeen = 17,
    Eighteen = 18,
    Nineteen = 19,
    Twenty = 20,
    TwentyOne = 21,
    TwentyTwo = 22,
    TwentyThree = 23,
    Ignore = 24,
}

impl From<u8> for IntervalMinutes {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::One,
            1 => Self::Two,
            2 => Self::Five,
            3 => Self::Ten,
            4 => Self::Fifteen,
            5 => Self::Twenty,
            6 => Self::TwentyFive,
            7 => Self::Thirty,
            8 => Self::ThirtyFive,
            9 => Self::Forty,
            10 => Self::FortyFive,
            11 => Self::Fifty,
            12 => Self::FiftyFive,
            13 => Self::Sixty,
            _ => Self::Ignore,
        }
    }
}

impl From<u8> for IntervalHours {
    fn from(value: u8) -> Self {
        if value <= 23 {
            // Discriminants 0..=23 are the hour counts themselves
            match value {
                0 => Self::Zero,
                1 => Self::One,
                2 => Self::Two,
                3 => Self::Three,
                4 => Self::Four,
                5 => Self::Five,
                6 => Self::Six,
                7 => Self::Seven,
                8 => Self::Eight,
                9 => Self::Nine,
                10 => Self::Ten,
                11 => Self::Eleven,
                12 => Self::Twelve,
                13 => Self::Thirteen,
                14 => Self::Fourteen,
                15 => Self::Fifteen,
                16 => Self::Sixteen,
                17 => Self::Seventeen,
                18 => Self::Eighteen,
                19 => Self::Nineteen,
                20 => Self::Twenty,
                21 => Self::TwentyOne,
                22 => Self::TwentyTwo,
                _ => Self::TwentyThree,
            }
        } else {
            Self::Ignore
        }
    }
}

impl IntervalMinutes {
    /// Minute count this variant stands for; `Ignore` counts as zero
    pub fn minutes(self) -> u64 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Five => 5,
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::Twenty => 20,
            Self::TwentyFive => 25,
            Self::Thirty => 30,
            Self::ThirtyFive => 35,
            Self::Forty => 40,
            Self::FortyFive => 45,
            Self::Fifty => 50,
            Self::FiftyFive => 55,
            Self::Sixty => 60,
            Self::Ignore => 0,
        }
    }
}

impl IntervalHours {
    /// Hour count this variant stands for; `Ignore` counts as zero
    pub fn hours(self) -> u64 {
        match self {
            Self::Ignore => 0,
            other => other as u64,
        }
    }
}

/// Spacing between successive executions of a recurring order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub minutes: IntervalMinutes,
    pub hours: IntervalHours,
}

impl Interval {
    pub fn new(minutes: u8, hours: u8) -> Self {
        Self {
            minutes: IntervalMinutes::from(minutes),
            hours: IntervalHours::from(hours),
        }
    }

    /// Total interval length in minutes
    pub fn as_minutes(&self) -> u64 {
        self.hours.hours() * 60 + self.minutes.minutes()
    }
}
