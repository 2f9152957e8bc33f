//! Landing page content: project summary, entry cards and milestones.

use crate::icon::Icon;
use crate::state::route::Page;

use super::Metric;

pub const TITLE: &str = "CralLabs";
pub const SUBTITLE: &str = "Ecossistema de IA + Data + Automação";
pub const DESCRIPTION: &str = "Documentação técnica do projeto que integra inteligência artificial, processamento de dados e automação para criar um sistema robusto e escalável.";
pub const CONTEXT: &str = "Projeto desenvolvido para demonstrar a integração de múltiplas tecnologias em um ecossistema coeso, focando em automação inteligente e processamento de dados em tempo real.";
pub const TECHNOLOGIES: &[&str] = &["React", "Supabase", "Python", "N8N", "PostgreSQL", "FastAPI"];

/// Card linking to one documentation page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub link: Page,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Building,
        title: "Arquitetura do Sistema",
        description: "Stack tecnológico com Supabase, Python, N8N e infraestrutura de deployment. Explore as decisões técnicas e padrões de arquitetura.",
        link: Page::Architecture,
    },
    Feature {
        icon: Icon::Database,
        title: "Pipeline de Dados",
        description: "Fluxos de ingestão, processamento e análise. Implementação de embeddings, RPC SQL e relatórios automatizados.",
        link: Page::Pipeline,
    },
    Feature {
        icon: Icon::Bot,
        title: "Agentes de IA",
        description: "Sistema de agentes inteligentes com processamento de linguagem natural e automação de processos complexos.",
        link: Page::Agents,
    },
    Feature {
        icon: Icon::Puzzle,
        title: "Integrações",
        description: "APIs externas, formulários dinâmicos e workflows N8N. Como diferentes sistemas se comunicam no ecossistema.",
        link: Page::Integrations,
    },
    Feature {
        icon: Icon::Rocket,
        title: "Deployment",
        description: "Estratégias de deploy com Vercel, Render e Cloudflare. Configuração de infraestrutura e monitoramento.",
        link: Page::Deployment,
    },
    Feature {
        icon: Icon::MapPin,
        title: "Roadmap",
        description: "Evolução planejada do projeto, próximas funcionalidades e melhorias técnicas identificadas.",
        link: Page::Roadmap,
    },
];

/// Headline number with a secondary caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectStat {
    pub metric: Metric,
    pub description: &'static str,
}

pub const PROJECT_STATS: &[ProjectStat] = &[
    ProjectStat { metric: Metric { value: "6", label: "Tecnologias Principais" }, description: "Stack integrado" },
    ProjectStat {
        metric: Metric { value: "3", label: "Camadas de Deploy" },
        description: "Frontend, Backend, Automação",
    },
    ProjectStat {
        metric: Metric { value: "PostgreSQL", label: "Banco de Dados" },
        description: "Com extensões e triggers",
    },
    ProjectStat { metric: Metric { value: "REST + RPC", label: "APIs" }, description: "Supabase + Python FastAPI" },
];

pub const TIMELINE_TITLE: &str = "Linha do Tempo do Projeto";
pub const TIMELINE_LEAD: &str =
    "Principais marcos no desenvolvimento do ecossistema CralLabs e decisões arquiteturais importantes.";

/// A milestone in the project timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub phase: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        phase: "Fase 1",
        title: "Fundação",
        description: "Definição da arquitetura base com Supabase e estruturação do banco de dados PostgreSQL.",
    },
    Milestone {
        phase: "Fase 2",
        title: "Integração",
        description: "Implementação dos agentes IA, pipeline de dados e workflows N8N para automação.",
    },
    Milestone {
        phase: "Fase 3",
        title: "Deploy",
        description: "Configuração da infraestrutura de produção e otimização de performance.",
    },
];
