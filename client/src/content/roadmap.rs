//! Roadmap page content: phases, future features and technical debt.

use crate::icon::Icon;

pub const LEAD: &str = "Evolução planejada do CralLabs: marcos alcançados, desenvolvimento atual e visão de futuro para o ecossistema de IA + Data + Automação.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoadmapStatus {
    Completed,
    InProgress,
    Planned,
}

impl RoadmapStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RoadmapStatus::Completed => "Concluído",
            RoadmapStatus::InProgress => "Em Progresso",
            RoadmapStatus::Planned => "Planejado",
        }
    }

    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            RoadmapStatus::Completed => Icon::CheckCircle,
            RoadmapStatus::InProgress => Icon::Clock,
            RoadmapStatus::Planned => Icon::AlertCircle,
        }
    }

    /// Modifier for the `status--<name>` class.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            RoadmapStatus::Completed => "completed",
            RoadmapStatus::InProgress => "in-progress",
            RoadmapStatus::Planned => "planned",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deliverable {
    pub name: &'static str,
    pub completed: bool,
}

/// Closing remark of a phase: what was learned, or what it focuses on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseNote {
    Learnings(&'static str),
    Focus(&'static str),
}

impl PhaseNote {
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            PhaseNote::Learnings(_) => "Aprendizados",
            PhaseNote::Focus(_) => "Foco",
        }
    }

    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            PhaseNote::Learnings(text) | PhaseNote::Focus(text) => text,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phase {
    pub phase: &'static str,
    pub status: RoadmapStatus,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [Deliverable],
    pub note: Option<PhaseNote>,
}

const fn done(name: &'static str) -> Deliverable {
    Deliverable { name, completed: true }
}

const fn pending(name: &'static str) -> Deliverable {
    Deliverable { name, completed: false }
}

pub const PHASES: &[Phase] = &[
    Phase {
        phase: "Q1 2025",
        status: RoadmapStatus::Completed,
        title: "Levantamento de requisitos",
        description: "Estabelecimento das ferramentas e necessidades para o projeto",
        items: &[
            done("Principais ferramentas de mercado"),
            done("Fluxograma de entregas"),
            done("Análise dos dados para aprendizado dos agentes"),
            done("Estrutura da regra de negócios"),
        ],
        note: Some(PhaseNote::Learnings(
            "Para esta etapa foram necessárias várias reuniões até que ficasse decidido como seria o andamento do projeto, estabelecendo os prazos e metas para entrega.",
        )),
    },
    Phase {
        phase: "Q2 2025",
        status: RoadmapStatus::Completed,
        title: "Fundação do Ecossistema",
        description: "Estabelecimento da arquitetura base e componentes principais",
        items: &[
            done("Setup Supabase + PostgreSQL"),
            done("Estrutura base de dados"),
            done("Desenvolvimento da ingestão de dados"),
            done("Ingestão inicial via N8N"),
        ],
        note: Some(PhaseNote::Learnings(
            "A escolha do Supabase se mostrou acertada para prototipagem rápida, especialmente com RLS policies e real-time subscriptions.",
        )),
    },
    Phase {
        phase: "Q3 2025",
        status: RoadmapStatus::Completed,
        title: "Pipeline de Dados e IA",
        description: "Implementação do processamento de dados e primeiros agentes IA",
        items: &[
            done("Pipeline de ingestão de dados com embeddings"),
            done("Interface feita via React e NestJS"),
            done("Chatbot básico com OpenAI"),
            done("Workflows N8N iniciais"),
        ],
        note: Some(PhaseNote::Learnings(
            "O uso de embeddings vetoriais com pgvector permitiu busca semântica eficiente, mas requer otimização de índices para escala.",
        )),
    },
    Phase {
        phase: "Q4 2025",
        status: RoadmapStatus::Completed,
        title: "Reajuste de banco de dados",
        description: "Análise e reestruturação do banco de dados de informações internas",
        items: &[
            done("Funções de text para jsonb e enriquecimento do metadata"),
            done("PSQL para execução de funções"),
            done("Re-indexação de colunas metadata"),
            done("Nomeclatura das colunas"),
        ],
        note: Some(PhaseNote::Learnings(
            "Durante o desenvolvimento do projeto começamos ver que a tabela principal de dados havia sido inserida de forma errada em no Supabase, dessa forma pensamos que ao invés de refazer tudo seria melhor iniciar um tratamento de dados sem custo adicional para análise.",
        )),
    },
    Phase {
        phase: "Q5 2025",
        status: RoadmapStatus::InProgress,
        title: "Integrações e Automação",
        description: "Expansão das conectividades e automação de processos",
        items: &[
            done("Leitura do SQL Server DW"),
            done("Weekly Report Agent"),
            pending("Otimização de consultas do Pricing Chatbot"),
            pending("Melhorias no formulário de ingestão dos dados externos"),
        ],
        note: Some(PhaseNote::Learnings(
            "Estamos atuando em melhorias para resposta do chatbot e desenvolvendo a V1 do agente de weekly report",
        )),
    },
    Phase {
        phase: "Q6 2025",
        status: RoadmapStatus::InProgress,
        title: "Otimização e Escala",
        description: "Performance, segurança e preparação para produção",
        items: &[
            pending("Otimização de performance"),
            pending("Auditoria de segurança"),
            pending("Benchmark de performance"),
            done("Documentação completa"),
        ],
        note: Some(PhaseNote::Focus("Foco em estabilidade e performance para ambientes de produção")),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "Alta",
            Priority::Medium => "Média",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Complexity {
    Medium,
    High,
    VeryHigh,
}

impl Complexity {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Complexity::Medium => "Média",
            Complexity::High => "Alta",
            Complexity::VeryHigh => "Muito Alta",
        }
    }

    /// High and very high complexity get the warning badge.
    #[must_use]
    pub fn is_demanding(self) -> bool {
        matches!(self, Complexity::High | Complexity::VeryHigh)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FutureFeature {
    pub name: &'static str,
    pub description: &'static str,
    pub complexity: Complexity,
    pub timeline: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCategory {
    pub category: &'static str,
    pub icon: Icon,
    pub priority: Priority,
    pub features: &'static [FutureFeature],
}

pub const FUTURE_FEATURES: &[FeatureCategory] = &[
    FeatureCategory {
        category: "Inteligência Artificial",
        icon: Icon::Lightbulb,
        priority: Priority::High,
        features: &[
            FutureFeature {
                name: "Multi-agent orchestration",
                description: "Sistema avançado de coordenação entre múltiplos agentes IA",
                complexity: Complexity::High,
                timeline: "Q1 2025",
            },
            FutureFeature {
                name: "Custom model fine-tuning",
                description: "Treinamento de modelos específicos para domínios de negócio",
                complexity: Complexity::VeryHigh,
                timeline: "Q2 2025",
            },
            FutureFeature {
                name: "Financial agent",
                description: "Agente de finanças para poscionamento contábil e financeiro da empresa",
                complexity: Complexity::Medium,
                timeline: "Q6 2025",
            },
        ],
    },
    FeatureCategory {
        category: "Dados e Analytics",
        icon: Icon::Target,
        priority: Priority::Medium,
        features: &[
            FutureFeature {
                name: "Spiff BI real-time insights",
                description: "Adicionar ao Spiff insights em tempo real do posicionamento comercial",
                complexity: Complexity::Medium,
                timeline: "Q6 2024",
            },
            FutureFeature {
                name: "Predictive analytics",
                description: "Modelos preditivos baseados em dados históricos",
                complexity: Complexity::High,
                timeline: "Q3 2025",
            },
            FutureFeature {
                name: "Data versioning",
                description: "Controle de versão para datasets e transformações",
                complexity: Complexity::Medium,
                timeline: "Q1 2025",
            },
        ],
    },
    FeatureCategory {
        category: "Infraestrutura",
        icon: Icon::MapPin,
        priority: Priority::High,
        features: &[
            FutureFeature {
                name: "Generative Agent",
                description: "Implementação dos agentes que possuem dados em tempo real",
                complexity: Complexity::High,
                timeline: "Q5 2025",
            },
            FutureFeature {
                name: "Advanced monitoring",
                description: "APM completo com alertas inteligentes",
                complexity: Complexity::Medium,
                timeline: "Q6 2024",
            },
            FutureFeature {
                name: "Auto-scaling optimization",
                description: "Otimização automática baseada em padrões de uso",
                complexity: Complexity::High,
                timeline: "Q2 2025",
            },
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechnicalDebt {
    pub area: &'static str,
    pub priority: Priority,
    pub description: &'static str,
    pub effort: &'static str,
    pub impact: &'static str,
}

pub const TECHNICAL_DEBT: &[TechnicalDebt] = &[
    TechnicalDebt {
        area: "Performance",
        priority: Priority::High,
        description: "Otimização de queries PostgreSQL e cache",
        effort: "2-3 sprints",
        impact: "Redução de 80% no tempo de resposta",
    },
    TechnicalDebt {
        area: "Testing",
        priority: Priority::High,
        description: "Cobertura de testes unitários e integração",
        effort: "3-4 sprints",
        impact: "Redução de bugs em produção",
    },
    TechnicalDebt {
        area: "Documentation",
        priority: Priority::Medium,
        description: "Documentação de APIs e arquitetura",
        effort: "1-2 sprints",
        impact: "Facilita onboarding e manutenção",
    },
    TechnicalDebt {
        area: "Security",
        priority: Priority::High,
        description: "Auditoria completa e implementação de best practices",
        effort: "2-3 sprints",
        impact: "Compliance e confiança do usuário",
    },
];
