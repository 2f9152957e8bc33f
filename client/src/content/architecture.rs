//! Architecture page content: components, data-feed flows and stack summary.

use crate::icon::Icon;

use super::FlowStep;

pub const LEAD: &str = "Conheça a estrutura técnica robusta que sustenta o ecossistema CralLabs, projetada para escalabilidade, performance e confiabilidade.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Component {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub category: &'static str,
    pub features: &'static [&'static str],
}

pub const COMPONENTS: &[Component] = &[
    Component {
        name: "Supabase",
        description: "Backend-as-a-Service completo com PostgreSQL, autenticação, índexação e consultas em tempo real",
        icon: Icon::Database,
        category: "Backend",
        features: &["PostgreSQL", "Real-time", "Auth", "Storage", "Indexes"],
    },
    Component {
        name: "Agno Framework",
        description: "Framework de IA personalizado para processamento inteligente e automação e criação de agentes autônomos",
        icon: Icon::Cpu,
        category: "IA",
        features: &["ML Models", "NLP", "Automation", "Custom Agents"],
    },
    Component {
        name: "Python Ecosystem",
        description: "Stack Python robusto para processamento de dados e machine learning",
        icon: Icon::GitBranch,
        category: "Backend",
        features: &["FastAPI", "Pandas", "Scikit-learn", "TensorFlow"],
    },
    Component {
        name: "N8N Workflows",
        description: "Orquestração de workflows e integrações sem código",
        icon: Icon::Zap,
        category: "Automação",
        features: &["Visual Workflows", "API Integrations", "Scheduling", "Webhooks"],
    },
    Component {
        name: "Chatbot Engine",
        description: "Motor de conversação inteligente com processamento de linguagem natural",
        icon: Icon::Server,
        category: "IA",
        features: &["NLU", "Context Aware", "Multi-language", "Deep thinking"],
    },
    Component {
        name: "SQL Datawarehouse",
        description: "Armazenamento centralizado para consultas analíticas e relatórios estratégicos",
        icon: Icon::Database,
        category: "Dados",
        features: &["ETL", "Consultas Analíticas", "SQL Server", "Escalabilidade de Leitura"],
    },
];

pub const INTERNAL_FLOW_TITLE: &str = "Fluxo de alimentação dos dados - Internos";
pub const INTERNAL_FLOW: &[FlowStep] = &[
    FlowStep { step: 1, title: "SQL Senior", description: "Extração de dados do banco da Senior" },
    FlowStep { step: 2, title: "Excel", description: "Tratamento e organização dos dados em planilhas" },
    FlowStep { step: 3, title: "Supabase Registros", description: "Geração de registros prontos para inserção" },
    FlowStep { step: 4, title: "Supabase", description: "Inserção final no banco e indexação" },
];

pub const EXTERNAL_FLOW_TITLE: &str = "Fluxo de alimentação dos dados - Externos";
pub const EXTERNAL_FLOW: &[FlowStep] = &[
    FlowStep {
        step: 1,
        title: "Formulário Concorrente",
        description: "Preenchimento manual dos concorrentes pelas consultoras",
    },
    FlowStep { step: 2, title: "N8N", description: "Tratamento e automação do fluxo de dados recebidos" },
    FlowStep { step: 3, title: "Supabase", description: "Inserção no banco de dados central" },
    FlowStep { step: 4, title: "Indexação", description: "Indexação para consultas e análise semântica" },
];

/// A labelled line in a stack summary card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackItem {
    pub name: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackGroup {
    pub title: &'static str,
    pub icon: Icon,
    pub items: &'static [StackItem],
}

pub const STACK: &[StackGroup] = &[
    StackGroup {
        title: "Backend & Dados",
        icon: Icon::Server,
        items: &[
            StackItem {
                name: "Supabase PostgreSQL",
                detail: "Banco principal com triggers, RLS, extensões, índices e views",
            },
            StackItem { name: "Python + FastAPI", detail: "APIs robustas e processamento de dados" },
            StackItem { name: "Vector Embeddings", detail: "Busca semântica e similarity matching" },
        ],
    },
    StackGroup {
        title: "IA & Automação",
        icon: Icon::Cpu,
        items: &[
            StackItem { name: "Agno Framework", detail: "Framework proprietário para agentes IA" },
            StackItem { name: "N8N Workflows", detail: "Orquestração visual de processos e documentos" },
            StackItem { name: "LLM Integration", detail: "Modelos de linguagem para conversação (OpenAI)" },
        ],
    },
];
