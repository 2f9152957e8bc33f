//! AI agents page content.

use crate::icon::Icon;

use super::{CodeSample, InfoCard};

pub const LEAD: &str = "Sistema distribuído de agentes inteligentes que colaboram para processar solicitações complexas, analisar dados e executar workflows automatizados.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Agent {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub capabilities: &'static [&'static str],
    pub technologies: &'static [&'static str],
    /// Ids of the agents this one talks to.
    pub interactions: &'static [&'static str],
}

pub const AGENTS: &[Agent] = &[
    Agent {
        id: "pricing-chatbot",
        name: "Pricing ChatBot",
        role: "Interação e Precificação",
        description: "Agente de conversação especializado em consultas de preços e planejamento de estratégias de precificação.",
        icon: Icon::MessageSquare,
        capabilities: &[
            "Responder perguntas sobre preços",
            "Comparar concorrência vs CRAL",
            "Gerar simulações rápidas de margem",
            "Auxiliar decisões comerciais",
        ],
        technologies: &["OpenAI GPT", "Supabase", "LangChain"],
        interactions: &["weekly-report", "invoicing-extractor"],
    },
    Agent {
        id: "weekly-report",
        name: "Weekly Report Generator",
        role: "Relatórios Semanais",
        description: "Responsável por consolidar dados internos e externos e gerar relatórios semanais com métricas e insights estratégicos.",
        icon: Icon::Database,
        capabilities: &[
            "Gerar relatórios semanais",
            "Consolidar dados internos e de mercado",
            "Apresentar indicadores de performance",
            "Exportar relatórios estruturados",
        ],
        technologies: &["Python", "Pandas", "Supabase", "Plotly"],
        interactions: &["pricing-chatbot", "invoicing-extractor"],
    },
    Agent {
        id: "invoicing-extractor",
        name: "Invoicing Extractor",
        role: "Extração de Notas",
        description: "Agente dedicado à extração e padronização de dados fiscais de documentos de faturamento do mercado externo de concorrentes para análise.",
        icon: Icon::Workflow,
        capabilities: &[
            "Extrair dados de notas fiscais do concorrente",
            "Leitura e extração de cotações e propostas",
            "Padronizar informações tributárias",
            "Popular Supabase com dados do mercado externo",
            "Servir de base para relatórios e análises",
        ],
        technologies: &["N8N", "FastAPI", "Supabase"],
        interactions: &["pricing-chatbot", "weekly-report"],
    },
];

/// Look up an agent by id.
#[must_use]
pub fn agent_by_id(id: &str) -> Option<&'static Agent> {
    AGENTS.iter().find(|agent| agent.id == id)
}

/// Display names of the agents `agent` talks to, joined with `", "`.
/// Unknown ids are skipped.
#[must_use]
pub fn interaction_names(agent: &Agent) -> String {
    agent
        .interactions
        .iter()
        .filter_map(|id| agent_by_id(id))
        .map(|other| other.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One hop in the request path between user, agents and data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommunicationStep {
    pub step: u8,
    pub from: &'static str,
    pub to: &'static str,
    pub action: &'static str,
    pub description: &'static str,
}

pub const COMMUNICATION_FLOW: &[CommunicationStep] = &[
    CommunicationStep {
        step: 1,
        from: "Usuário",
        to: "Pricing ChatBot",
        action: "Envia consulta",
        description: "Usuário interage pelo chatbot para perguntas de precificação",
    },
    CommunicationStep {
        step: 2,
        from: "Pricing ChatBot",
        to: "Supabase + Similaridade + RPC",
        action: "Consulta dados",
        description: "ChatBot busca informações no banco via embeddings e funções RPC",
    },
    CommunicationStep {
        step: 3,
        from: "Weekly Report Generator",
        to: "Supabase + Similaridade + RPC + WeeklyData CSV",
        action: "Consolida relatórios",
        description: "Gera relatórios semanais combinando dados internos e externos",
    },
];

pub const CODE_SAMPLE: CodeSample = CodeSample {
    title: "Sistema de Comunicação entre Agentes",
    icon: Icon::Brain,
    language: "python",
    code: r#"# Exemplo de comunicação entre agentes
from agno.models.openai import OpenAIChat


def build_agent() -> Agent:
    model = OpenAIChat(id=DEFAULT_OPENAI_MODEL)
    return Agent(
        name="PricingAgent",
        instructions=load_instructions(),
        model=model,
        tools=[
            query_documents,
            query_thirdparty_documents,
            query_thirdparty_proposals,
            query_comparison_data,
            run_sql,
        ],
    )


agent: Agent = build_agent()


def _extract_response_text(response: RunOutput) -> str:
    if isinstance(response.content, str):
        return response.content
    if hasattr(response, "output") and isinstance(
        response.output, str  # type: ignore
    ):  # pyright: ignore[reportAttributeAccessIssue]
        return response.output  # type: ignore
    return str(response.content)
"#,
};

pub const DECISIONS: &[InfoCard] = &[
    InfoCard {
        icon: Icon::Workflow,
        title: "Separação de Responsabilidades",
        description: "Cada agente tem uma responsabilidade específica, permitindo especialização e manutenção independente. Isso facilita debugging e otimização de performance.",
    },
    InfoCard {
        icon: Icon::MessageSquare,
        title: "Comunicação Assíncrona",
        description: "Uso de mensagens assíncronas para comunicação entre agentes, garantindo escalabilidade e resiliência do sistema mesmo com alta demanda.",
    },
];
