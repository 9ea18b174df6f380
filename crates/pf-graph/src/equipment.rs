//! Equipment kinds.

use serde::{Deserialize, Serialize};

/// Grouping of equipment kinds; each category owns one parameter layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    RawMaterial,
    Reactor,
    HeatExchanger,
    Separation,
    Basic,
    Analysis,
}

/// Closed set of process-unit kinds available on the flowsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    // Raw materials
    FeedTank,
    StorageTank,
    SteamInput,
    SteamOutput,

    // Reactors
    Pfr,
    Cstr,
    BatchReactor,
    FluidizedBed,
    PackedBed,

    // Heat exchangers
    ShellAndTube,
    Plate,
    AirCooled,
    Spiral,
    DoublePipe,

    // Separation
    Distillation,
    Flash,
    Absorber,
    Extractor,
    Cyclone,
    Crystallizer,
    Membrane,

    // Basic equipment
    Pump,
    Mixer,
    Splitter,
    Compressor,
    Tank,
    Filter,
    Dryer,
    Evaporator,

    // Analysis equipment
    Analyzer,
    Sensor,
    Sampler,
    CatalystBed,
}

impl EquipmentKind {
    pub const ALL: [EquipmentKind; 33] = [
        EquipmentKind::FeedTank,
        EquipmentKind::StorageTank,
        EquipmentKind::SteamInput,
        EquipmentKind::SteamOutput,
        EquipmentKind::Pfr,
        EquipmentKind::Cstr,
        EquipmentKind::BatchReactor,
        EquipmentKind::FluidizedBed,
        EquipmentKind::PackedBed,
        EquipmentKind::ShellAndTube,
        EquipmentKind::Plate,
        EquipmentKind::AirCooled,
        EquipmentKind::Spiral,
        EquipmentKind::DoublePipe,
        EquipmentKind::Distillation,
        EquipmentKind::Flash,
        EquipmentKind::Absorber,
        EquipmentKind::Extractor,
        EquipmentKind::Cyclone,
        EquipmentKind::Crystallizer,
        EquipmentKind::Membrane,
        EquipmentKind::Pump,
        EquipmentKind::Mixer,
        EquipmentKind::Splitter,
        EquipmentKind::Compressor,
        EquipmentKind::Tank,
        EquipmentKind::Filter,
        EquipmentKind::Dryer,
        EquipmentKind::Evaporator,
        EquipmentKind::Analyzer,
        EquipmentKind::Sensor,
        EquipmentKind::Sampler,
        EquipmentKind::CatalystBed,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            EquipmentKind::FeedTank => "feed_tank",
            EquipmentKind::StorageTank => "storage_tank",
            EquipmentKind::SteamInput => "steam_input",
            EquipmentKind::SteamOutput => "steam_output",
            EquipmentKind::Pfr => "pfr",
            EquipmentKind::Cstr => "cstr",
            EquipmentKind::BatchReactor => "batch_reactor",
            EquipmentKind::FluidizedBed => "fluidized_bed",
            EquipmentKind::PackedBed => "packed_bed",
            EquipmentKind::ShellAndTube => "shell_and_tube",
            EquipmentKind::Plate => "plate",
            EquipmentKind::AirCooled => "air_cooled",
            EquipmentKind::Spiral => "spiral",
            EquipmentKind::DoublePipe => "double_pipe",
            EquipmentKind::Distillation => "distillation",
            EquipmentKind::Flash => "flash",
            EquipmentKind::Absorber => "absorber",
            EquipmentKind::Extractor => "extractor",
            EquipmentKind::Cyclone => "cyclone",
            EquipmentKind::Crystallizer => "crystallizer",
            EquipmentKind::Membrane => "membrane",
            EquipmentKind::Pump => "pump",
            EquipmentKind::Mixer => "mixer",
            EquipmentKind::Splitter => "splitter",
            EquipmentKind::Compressor => "compressor",
            EquipmentKind::Tank => "tank",
            EquipmentKind::Filter => "filter",
            EquipmentKind::Dryer => "dryer",
            EquipmentKind::Evaporator => "evaporator",
            EquipmentKind::Analyzer => "analyzer",
            EquipmentKind::Sensor => "sensor",
            EquipmentKind::Sampler => "sampler",
            EquipmentKind::CatalystBed => "catalyst_bed",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.key() == key)
    }

    pub fn category(&self) -> EquipmentCategory {
        use EquipmentKind::*;
        match self {
            FeedTank | StorageTank | SteamInput | SteamOutput => EquipmentCategory::RawMaterial,
            Pfr | Cstr | BatchReactor | FluidizedBed | PackedBed => EquipmentCategory::Reactor,
            ShellAndTube | Plate | AirCooled | Spiral | DoublePipe => {
                EquipmentCategory::HeatExchanger
            }
            Distillation | Flash | Absorber | Extractor | Cyclone | Crystallizer | Membrane => {
                EquipmentCategory::Separation
            }
            Pump | Mixer | Splitter | Compressor | Tank | Filter | Dryer | Evaporator => {
                EquipmentCategory::Basic
            }
            Analyzer | Sensor | Sampler | CatalystBed => EquipmentCategory::Analysis,
        }
    }

    pub fn is_reactor(&self) -> bool {
        self.category() == EquipmentCategory::Reactor
    }

    pub fn is_heat_exchanger(&self) -> bool {
        self.category() == EquipmentCategory::HeatExchanger
    }

    /// Units where vapor and liquid coexist at equilibrium.
    pub fn supports_vle(&self) -> bool {
        matches!(
            self,
            EquipmentKind::Distillation | EquipmentKind::Flash | EquipmentKind::Evaporator
        )
    }

    /// Units with interphase mass transfer.
    pub fn supports_mass_transfer(&self) -> bool {
        matches!(
            self,
            EquipmentKind::Distillation | EquipmentKind::Absorber | EquipmentKind::Extractor
        )
    }
}

impl std::fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
