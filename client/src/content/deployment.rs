//! Deployment page content.

use crate::icon::Icon;

use super::InfoCard;

pub const LEAD: &str = "Infraestrutura distribuída e resiliente que garante alta disponibilidade, performance otimizada e escalabilidade automática para o ecossistema CralLabs.";

/// A labelled configuration value; list values are joined for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigEntry {
    pub label: &'static str,
    pub values: &'static [&'static str],
}

impl ConfigEntry {
    #[must_use]
    pub fn display_value(&self) -> String {
        self.values.join(", ")
    }
}

/// A hosting layer and how it is configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layer {
    pub name: &'static str,
    pub provider: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub features: &'static [&'static str],
    pub configuration: &'static [ConfigEntry],
}

pub const LAYERS: &[Layer] = &[Layer {
    name: "Front-end & Back-end",
    provider: "Vercel",
    description: "Front-end React/Streamlit e APIs Python hospedados de forma unificada",
    icon: Icon::Globe,
    features: &[
        "Deploy automático via Git",
        "Execução de Streamlit e APIs Python",
        "Integração direta com Supabase",
        "Sem hospedagem adicional",
    ],
    configuration: &[
        ConfigEntry { label: "Build Command", values: &["npm run build"] },
        ConfigEntry { label: "Output Directory", values: &["dist"] },
        ConfigEntry { label: "Runtime", values: &["Python 3.11 + Node 18.x"] },
        ConfigEntry { label: "Environment Variables", values: &["SUPABASE_URL", "SUPABASE_ANON_KEY", "OPENAI_API_KEY"] },
    ],
}];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricStatus {
    Good,
    Excellent,
}

impl MetricStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MetricStatus::Good => "Bom",
            MetricStatus::Excellent => "Excelente",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonitoringMetric {
    pub metric: &'static str,
    pub value: &'static str,
    pub status: MetricStatus,
}

pub const MONITORING: &[MonitoringMetric] = &[
    MonitoringMetric { metric: "Frontend Response Time", value: "< 200ms", status: MetricStatus::Good },
    MonitoringMetric { metric: "API Response Time", value: "< 500ms", status: MetricStatus::Good },
    MonitoringMetric { metric: "Database Transactions", value: "~100/dia", status: MetricStatus::Good },
    MonitoringMetric { metric: "Error Rate", value: "< 0.1%", status: MetricStatus::Good },
    MonitoringMetric { metric: "Workflow Success Rate", value: "99.2%", status: MetricStatus::Good },
    MonitoringMetric { metric: "Uptime (30d)", value: "99.95%", status: MetricStatus::Excellent },
];

pub const SECURITY: &[InfoCard] = &[
    InfoCard {
        icon: Icon::Shield,
        title: "SSL/TLS",
        description: "Certificados automáticos via Let's Encrypt com renovação automática e redirect HTTPS.",
    },
    InfoCard {
        icon: Icon::Monitor,
        title: "Backup Automatizado",
        description: "Backups diários do banco de dados com retenção de 30 dias e teste de recuperação semanal.",
    },
];
