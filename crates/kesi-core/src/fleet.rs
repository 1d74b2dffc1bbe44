//! Sample fleet and business data backing the content views
//!
//! Every view in the console reads from these static samples. There is no
//! data pipeline, persistence, or device communication behind them.

use chrono::{DateTime, Duration, Utc};

/// Connectivity state of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    Online,
    Offline,
    Warning,
}

impl DeviceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DeviceStatus::Online => "online",
            DeviceStatus::Offline => "offline",
            DeviceStatus::Warning => "warning",
        }
    }
}

/// An IoT fleet device row.
#[derive(Debug, Clone)]
pub struct IotDevice {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub status: DeviceStatus,
    pub location: &'static str,
    pub last_update: DateTime<Utc>,
}

/// Alarm severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmLevel {
    Info,
    Warning,
    Critical,
}

impl AlarmLevel {
    pub fn label(&self) -> &'static str {
        match self {
            AlarmLevel::Info => "info",
            AlarmLevel::Warning => "warning",
            AlarmLevel::Critical => "critical",
        }
    }
}

/// A device alarm row.
#[derive(Debug, Clone)]
pub struct Alarm {
    pub id: &'static str,
    pub device_name: &'static str,
    pub level: AlarmLevel,
    pub message: &'static str,
    pub time: DateTime<Utc>,
    pub handled: bool,
}

/// Direction of a business metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Stable => "→",
        }
    }
}

/// A business KPI row.
#[derive(Debug, Clone)]
pub struct BusinessMetric {
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub trend: Trend,
}

/// A video device row (camera or NVR).
#[derive(Debug, Clone)]
pub struct VideoDevice {
    pub name: &'static str,
    pub ip: &'static str,
    pub status: DeviceStatus,
    pub channels: u16,
    pub has_ai: bool,
}

/// Run state of an AI agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentStatus {
    Running,
    Stopped,
    Error,
}

impl AgentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AgentStatus::Running => "running",
            AgentStatus::Stopped => "stopped",
            AgentStatus::Error => "error",
        }
    }
}

/// An AI agent row.
#[derive(Debug, Clone)]
pub struct AiAgent {
    pub name: &'static str,
    pub kind: &'static str,
    pub status: AgentStatus,
    pub description: &'static str,
}

/// A visualization project row.
#[derive(Debug, Clone)]
pub struct VisualizationProject {
    pub name: &'static str,
    pub kind: &'static str,
    pub published: bool,
}

pub fn sample_iot_devices() -> Vec<IotDevice> {
    let now = Utc::now();
    vec![
        IotDevice {
            id: "1",
            name: "Temperature Sensor 01",
            kind: "sensor",
            status: DeviceStatus::Online,
            location: "Workshop A",
            last_update: now,
        },
        IotDevice {
            id: "2",
            name: "Temperature Sensor 02",
            kind: "sensor",
            status: DeviceStatus::Online,
            location: "Workshop A",
            last_update: now,
        },
        IotDevice {
            id: "3",
            name: "Humidity Sensor 01",
            kind: "sensor",
            status: DeviceStatus::Warning,
            location: "Workshop B",
            last_update: now - Duration::hours(1),
        },
        IotDevice {
            id: "4",
            name: "PLC Controller 01",
            kind: "controller",
            status: DeviceStatus::Online,
            location: "Control Room",
            last_update: now,
        },
        IotDevice {
            id: "5",
            name: "PLC Controller 02",
            kind: "controller",
            status: DeviceStatus::Offline,
            location: "Control Room",
            last_update: now - Duration::hours(2),
        },
        IotDevice {
            id: "6",
            name: "Smart Meter 01",
            kind: "meter",
            status: DeviceStatus::Online,
            location: "Substation",
            last_update: now,
        },
        IotDevice {
            id: "7",
            name: "Smart Meter 02",
            kind: "meter",
            status: DeviceStatus::Online,
            location: "Substation",
            last_update: now,
        },
        IotDevice {
            id: "8",
            name: "Pressure Sensor 01",
            kind: "sensor",
            status: DeviceStatus::Online,
            location: "Pipeline A",
            last_update: now,
        },
    ]
}

pub fn sample_alarms() -> Vec<Alarm> {
    let now = Utc::now();
    vec![
        Alarm {
            id: "1",
            device_name: "Humidity Sensor 01",
            level: AlarmLevel::Warning,
            message: "Humidity out of range",
            time: now - Duration::hours(1),
            handled: false,
        },
        Alarm {
            id: "2",
            device_name: "PLC Controller 02",
            level: AlarmLevel::Critical,
            message: "Device offline",
            time: now - Duration::hours(2),
            handled: false,
        },
        Alarm {
            id: "3",
            device_name: "Temperature Sensor 01",
            level: AlarmLevel::Info,
            message: "Data refreshed",
            time: now,
            handled: true,
        },
    ]
}

pub fn sample_business_metrics() -> Vec<BusinessMetric> {
    vec![
        BusinessMetric {
            name: "Total energy",
            value: 12450.0,
            unit: "kWh",
            trend: Trend::Down,
        },
        BusinessMetric {
            name: "Output",
            value: 3850.0,
            unit: "pcs",
            trend: Trend::Up,
        },
        BusinessMetric {
            name: "Equipment efficiency",
            value: 87.5,
            unit: "%",
            trend: Trend::Up,
        },
        BusinessMetric {
            name: "Quality pass rate",
            value: 98.2,
            unit: "%",
            trend: Trend::Stable,
        },
    ]
}

pub fn sample_video_devices() -> Vec<VideoDevice> {
    vec![
        VideoDevice {
            name: "Camera 01",
            ip: "192.168.1.101",
            status: DeviceStatus::Online,
            channels: 1,
            has_ai: true,
        },
        VideoDevice {
            name: "Camera 02",
            ip: "192.168.1.102",
            status: DeviceStatus::Online,
            channels: 1,
            has_ai: false,
        },
        VideoDevice {
            name: "NVR 01",
            ip: "192.168.1.201",
            status: DeviceStatus::Online,
            channels: 16,
            has_ai: true,
        },
        VideoDevice {
            name: "Camera 03",
            ip: "192.168.1.103",
            status: DeviceStatus::Offline,
            channels: 1,
            has_ai: false,
        },
    ]
}

pub fn sample_ai_agents() -> Vec<AiAgent> {
    vec![
        AiAgent {
            name: "Inspection Agent",
            kind: "vision",
            status: AgentStatus::Running,
            description: "Detects surface defects on the production line",
        },
        AiAgent {
            name: "Energy Advisor",
            kind: "forecast",
            status: AgentStatus::Running,
            description: "Forecasts hourly energy consumption",
        },
        AiAgent {
            name: "Report Writer",
            kind: "llm",
            status: AgentStatus::Stopped,
            description: "Drafts weekly operation reports",
        },
        AiAgent {
            name: "Anomaly Hunter",
            kind: "timeseries",
            status: AgentStatus::Error,
            description: "Flags abnormal sensor readings",
        },
    ]
}

pub fn sample_visualization_projects() -> Vec<VisualizationProject> {
    vec![
        VisualizationProject {
            name: "Plant Overview Screen",
            kind: "large-screen",
            published: true,
        },
        VisualizationProject {
            name: "Energy Dashboard",
            kind: "dashboard",
            published: true,
        },
        VisualizationProject {
            name: "Quality Trends",
            kind: "dashboard",
            published: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_non_empty() {
        assert!(!sample_iot_devices().is_empty());
        assert!(!sample_alarms().is_empty());
        assert!(!sample_business_metrics().is_empty());
        assert!(!sample_video_devices().is_empty());
        assert!(!sample_ai_agents().is_empty());
        assert!(!sample_visualization_projects().is_empty());
    }

    #[test]
    fn test_device_ids_unique() {
        let devices = sample_iot_devices();
        let mut seen = std::collections::HashSet::new();
        for device in &devices {
            assert!(seen.insert(device.id));
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(DeviceStatus::Online.label(), "online");
        assert_eq!(AlarmLevel::Critical.label(), "critical");
        assert_eq!(AgentStatus::Error.label(), "error");
        assert_eq!(Trend::Up.arrow(), "↑");
    }
}
