use std::fmt;

/// A configurational template. Most molecules use only `TH1` (`@`,
/// counterclockwise) and `TH2` (`@@`, clockwise). The extended families
/// are carried through reading and writing without geometric
/// interpretation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Configuration {
    TH1,
    TH2,
    AL1,
    AL2,
    SP1,
    SP2,
    SP3,
    TB1,
    TB2,
    TB3,
    TB4,
    TB5,
    TB6,
    TB7,
    TB8,
    TB9,
    TB10,
    TB11,
    TB12,
    TB13,
    TB14,
    TB15,
    TB16,
    TB17,
    TB18,
    TB19,
    TB20,
    OH1,
    OH2,
    OH3,
    OH4,
    OH5,
    OH6,
    OH7,
    OH8,
    OH9,
    OH10,
    OH11,
    OH12,
    OH13,
    OH14,
    OH15,
    OH16,
    OH17,
    OH18,
    OH19,
    OH20,
    OH21,
    OH22,
    OH23,
    OH24,
    OH25,
    OH26,
    OH27,
    OH28,
    OH29,
    OH30,
    UnspecifiedTH,
    UnspecifiedAL,
    UnspecifiedSP,
    UnspecifiedTB,
    UnspecifiedOH,
}

impl Configuration {
    pub fn th(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::TH1),
            2 => Some(Self::TH2),
            _ => None,
        }
    }

    pub fn al(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::AL1),
            2 => Some(Self::AL2),
            _ => None,
        }
    }

    pub fn sp(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::SP1),
            2 => Some(Self::SP2),
            3 => Some(Self::SP3),
            _ => None,
        }
    }

    pub fn tb(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::TB1),
            2 => Some(Self::TB2),
            3 => Some(Self::TB3),
            4 => Some(Self::TB4),
            5 => Some(Self::TB5),
            6 => Some(Self::TB6),
            7 => Some(Self::TB7),
            8 => Some(Self::TB8),
            9 => Some(Self::TB9),
            10 => Some(Self::TB10),
            11 => Some(Self::TB11),
            12 => Some(Self::TB12),
            13 => Some(Self::TB13),
            14 => Some(Self::TB14),
            15 => Some(Self::TB15),
            16 => Some(Self::TB16),
            17 => Some(Self::TB17),
            18 => Some(Self::TB18),
            19 => Some(Self::TB19),
            20 => Some(Self::TB20),
            _ => None,
        }
    }

    pub fn oh(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::OH1),
            2 => Some(Self::OH2),
            3 => Some(Self::OH3),
            4 => Some(Self::OH4),
            5 => Some(Self::OH5),
            6 => Some(Self::OH6),
            7 => Some(Self::OH7),
            8 => Some(Self::OH8),
            9 => Some(Self::OH9),
            10 => Some(Self::OH10),
            11 => Some(Self::OH11),
            12 => Some(Self::OH12),
            13 => Some(Self::OH13),
            14 => Some(Self::OH14),
            15 => Some(Self::OH15),
            16 => Some(Self::OH16),
            17 => Some(Self::OH17),
            18 => Some(Self::OH18),
            19 => Some(Self::OH19),
            20 => Some(Self::OH20),
            21 => Some(Self::OH21),
            22 => Some(Self::OH22),
            23 => Some(Self::OH23),
            24 => Some(Self::OH24),
            25 => Some(Self::OH25),
            26 => Some(Self::OH26),
            27 => Some(Self::OH27),
            28 => Some(Self::OH28),
            29 => Some(Self::OH29),
            30 => Some(Self::OH30),
            _ => None,
        }
    }

    /// True for `@`/`@@` and the bare `@TH` tag.
    pub const fn is_tetrahedral(&self) -> bool {
        matches!(self, Self::TH1 | Self::TH2 | Self::UnspecifiedTH)
    }

    /// The mirror image of a tetrahedral configuration. Other families
    /// return self unchanged.
    pub const fn flipped(&self) -> Self {
        match self {
            Self::TH1 => Self::TH2,
            Self::TH2 => Self::TH1,
            other => *other,
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::TH1 | Self::AL1 => "@",
                Self::TH2 | Self::AL2 => "@@",
                Self::SP1 => "@SP1",
                Self::SP2 => "@SP2",
                Self::SP3 => "@SP3",
                Self::TB1 => "@TB1",
                Self::TB2 => "@TB2",
                Self::TB3 => "@TB3",
                Self::TB4 => "@TB4",
                Self::TB5 => "@TB5",
                Self::TB6 => "@TB6",
                Self::TB7 => "@TB7",
                Self::TB8 => "@TB8",
                Self::TB9 => "@TB9",
                Self::TB10 => "@TB10",
                Self::TB11 => "@TB11",
                Self::TB12 => "@TB12",
                Self::TB13 => "@TB13",
                Self::TB14 => "@TB14",
                Self::TB15 => "@TB15",
                Self::TB16 => "@TB16",
                Self::TB17 => "@TB17",
                Self::TB18 => "@TB18",
                Self::TB19 => "@TB19",
                Self::TB20 => "@TB20",
                Self::OH1 => "@OH1",
                Self::OH2 => "@OH2",
                Self::OH3 => "@OH3",
                Self::OH4 => "@OH4",
                Self::OH5 => "@OH5",
                Self::OH6 => "@OH6",
                Self::OH7 => "@OH7",
                Self::OH8 => "@OH8",
                Self::OH9 => "@OH9",
                Self::OH10 => "@OH10",
                Self::OH11 => "@OH11",
                Self::OH12 => "@OH12",
                Self::OH13 => "@OH13",
                Self::OH14 => "@OH14",
                Self::OH15 => "@OH15",
                Self::OH16 => "@OH16",
                Self::OH17 => "@OH17",
                Self::OH18 => "@OH18",
                Self::OH19 => "@OH19",
                Self::OH20 => "@OH20",
                Self::OH21 => "@OH21",
                Self::OH22 => "@OH22",
                Self::OH23 => "@OH23",
                Self::OH24 => "@OH24",
                Self::OH25 => "@OH25",
                Self::OH26 => "@OH26",
                Self::OH27 => "@OH27",
                Self::OH28 => "@OH28",
                Self::OH29 => "@OH29",
                Self::OH30 => "@OH30",
                Self::UnspecifiedTH => "@TH",
                Self::UnspecifiedAL => "@AL",
                Self::UnspecifiedSP => "@SP",
                Self::UnspecifiedTB => "@TB",
                Self::UnspecifiedOH => "@OH",
            }
        )
    }
}
