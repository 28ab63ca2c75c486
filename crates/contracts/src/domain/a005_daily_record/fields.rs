/// Measurement inputs of the daily sheet.
///
/// The wire key is what the backend uses in the required-field lists, in
/// the POST payload and in fetched records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeasurementField {
    ProductionVolume,
    OperationHours,
    ServiceInterruption,
    TotalHoursServiceInterruption,
    ElectricityConsumption,
    VfdFrequency,
    SpotFlow,
    SpotPressure,
    TimeSpotMeasurements,
    LineVoltage1,
    LineVoltage2,
    LineVoltage3,
    LineCurrent1,
    LineCurrent2,
    LineCurrent3,
}

impl MeasurementField {
    pub const COUNT: usize = 15;

    /// Form and table order.
    pub const ALL: [MeasurementField; Self::COUNT] = [
        Self::ProductionVolume,
        Self::OperationHours,
        Self::ServiceInterruption,
        Self::TotalHoursServiceInterruption,
        Self::ElectricityConsumption,
        Self::VfdFrequency,
        Self::SpotFlow,
        Self::SpotPressure,
        Self::TimeSpotMeasurements,
        Self::LineVoltage1,
        Self::LineVoltage2,
        Self::LineVoltage3,
        Self::LineCurrent1,
        Self::LineCurrent2,
        Self::LineCurrent3,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::ProductionVolume => "productionVolume",
            Self::OperationHours => "operationHours",
            Self::ServiceInterruption => "serviceInterruption",
            Self::TotalHoursServiceInterruption => "totalHoursServiceInterruption",
            Self::ElectricityConsumption => "electricityConsumption",
            Self::VfdFrequency => "VFDFrequency",
            Self::SpotFlow => "spotFlow",
            Self::SpotPressure => "spotPressure",
            Self::TimeSpotMeasurements => "timeSpotMeasurements",
            Self::LineVoltage1 => "lineVoltage1",
            Self::LineVoltage2 => "lineVoltage2",
            Self::LineVoltage3 => "lineVoltage3",
            Self::LineCurrent1 => "lineCurrent1",
            Self::LineCurrent2 => "lineCurrent2",
            Self::LineCurrent3 => "lineCurrent3",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Label next to the form input, with unit.
    pub fn label(self) -> &'static str {
        match self {
            Self::ProductionVolume => "Production Volume (m³)",
            Self::OperationHours => "Operation Hours",
            Self::ServiceInterruption => "Number of Service Interruptions",
            Self::TotalHoursServiceInterruption => "Total Number of Hours of Service interruption",
            Self::ElectricityConsumption => "Electricity Consumption",
            Self::VfdFrequency => "VFD Frequency (Hz)",
            Self::SpotFlow => "Spot Flow (LPS)",
            Self::SpotPressure => "Spot Pressure (PSI)",
            Self::TimeSpotMeasurements => "Time Spot Measurements were taken",
            Self::LineVoltage1 => "Line Voltage [L1-L2] (Volts)",
            Self::LineVoltage2 => "Line Voltage [L2-L3] (Volts)",
            Self::LineVoltage3 => "Line Voltage [L3-L1] (Volts)",
            Self::LineCurrent1 => "Line Current [L1-L2] (Amps)",
            Self::LineCurrent2 => "Line Current [L2-L3] (Amps)",
            Self::LineCurrent3 => "Line Current [L3-L1] (Amps)",
        }
    }

    /// Column header in the records table.
    pub fn header(self) -> &'static str {
        match self {
            Self::ProductionVolume => "Production Volume",
            Self::OperationHours => "Operation Hours",
            Self::ServiceInterruption => "Number of Service Interruptions",
            Self::TotalHoursServiceInterruption => "Total Number of Hours of Service Interruption",
            Self::ElectricityConsumption => "Electricity Consumption",
            Self::VfdFrequency => "VFD Frequency",
            Self::SpotFlow => "Spot Flow",
            Self::SpotPressure => "Spot Pressure",
            Self::TimeSpotMeasurements => "Time Spot Measurements were taken",
            Self::LineVoltage1 => "Line Voltage [L1-L2]",
            Self::LineVoltage2 => "Line Voltage [L2-L3]",
            Self::LineVoltage3 => "Line Voltage [L3-L1]",
            Self::LineCurrent1 => "Line Current [L1-L2]",
            Self::LineCurrent2 => "Line Current [L2-L3]",
            Self::LineCurrent3 => "Line Current [L3-L1]",
        }
    }
}
