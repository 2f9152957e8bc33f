//! Data pipeline page content.

use crate::icon::Icon;

use super::{CodeSample, Metric};

pub const LEAD: &str = "Arquitetura de processamento de dados do CralLabs: da ingestão à entrega, com foco em qualidade, performance e escalabilidade.";

/// One stage of the processing flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stage {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub details: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub const STAGES: &[Stage] = &[
    Stage {
        id: 1,
        title: "Ingestão",
        description: "Coleta automatizada de dados de múltiplas fontes",
        icon: Icon::Database,
        details: &[
            "APIs REST de sistemas externos",
            "SQL server DW",
            "Upload manual via formulários",
            "Integração N8N para dados recorrentes",
        ],
        technologies: &["Supabase Functions", "PostgreSQL", "N8N"],
    },
    Stage {
        id: 2,
        title: "Tratamento",
        description: "Verificação de integridade e qualidade dos dados",
        icon: Icon::GitBranch,
        details: &[
            "Schema validation com Zod",
            "Padronização de registros",
            "Normalização de formatos e dados",
            "Logging de erros e inconsistências",
        ],
        technologies: &["Python", "Zod", "PostgreSQL Triggers"],
    },
    Stage {
        id: 3,
        title: "Processamento",
        description: "Transformação e enriquecimento dos dados",
        icon: Icon::Zap,
        details: &[
            "Limpeza e formatação",
            "Geração de embeddings vetoriais",
            "Cálculos e agregações",
            "Classificação automática",
        ],
        technologies: &["Python FastAPI", "OpenAI Embeddings", "pgvector"],
    },
    Stage {
        id: 4,
        title: "Armazenamento",
        description: "Persistência estruturada e otimizada",
        icon: Icon::FileText,
        details: &[
            "Tabelas relacionais PostgreSQL",
            "Índices para busca vetorial",
            "Particionamento temporal",
            "Backup automatizado",
        ],
        technologies: &["PostgreSQL", "pgvector", "RLS Policies"],
    },
    Stage {
        id: 5,
        title: "Análise",
        description: "Geração de insights e métricas",
        icon: Icon::Calendar,
        details: &[
            "Views materializadas",
            "Relatórios semanais automatizados",
            "Dashboards em tempo real",
            "Alertas baseados em thresholds",
        ],
        technologies: &["PostgreSQL Views", "Cron Jobs", "Supabase Realtime"],
    },
    Stage {
        id: 6,
        title: "Distribuição",
        description: "APIs e interfaces para consumo dos dados",
        icon: Icon::Workflow,
        details: &[
            "REST APIs via Supabase",
            "RPC Functions customizadas",
            "Webhooks para notificações",
            "Chatbot de análises",
        ],
        technologies: &["Supabase API", "Agno", "Streamlit"],
    },
];

pub const RPC_SAMPLE: CodeSample = CodeSample {
    title: "RPC Function PostgreSQL",
    icon: Icon::Database,
    language: "sql",
    code: r"-- Exemplo de RPC Function do match_* por similaridade
CREATE OR REPLACE FUNCTION match_proposals(
  query_embedding VECTOR(1536),
  match_count INT DEFAULT NULL,
  match_threshold FLOAT DEFAULT 0.0
)
RETURNS TABLE (
  id BIGINT,
  content TEXT,
  metadata JSONB,
  similarity FLOAT
)
LANGUAGE plpgsql
STABLE
AS $$
BEGIN
  RETURN QUERY
  SELECT
    p.id,
    p.content,
    p.metadata,
    1 - (p.embedding <=> query_embedding) AS similarity
  FROM thirdpartyproposals p
  WHERE (p.embedding <=> query_embedding) <= 1 - match_threshold
  ORDER BY p.embedding <=> query_embedding
  LIMIT COALESCE(match_count, 100);
END;
$$;",
};

pub const EMBEDDING_SAMPLE: CodeSample = CodeSample {
    title: "Geração de Embeddings",
    icon: Icon::Zap,
    language: "python",
    code: r#"# Geração de embeddings para busca semântica
import openai
from supabase import create_client

def generate_embeddings(text_content):
    """Gera embeddings vetoriais para busca semântica"""
    response = openai.Embedding.create(
        input=text_content,
        model="text-embedding-ada-002"
    )

    embedding = response['data'][0]['embedding']

    # Armazena no PostgreSQL com pgvector
    supabase.table('documents').insert({
        'content': text_content,
        'embedding': embedding,
        'created_at': 'now()'
    }).execute()

    return embedding"#,
};

pub const AUTOMATION_SAMPLE: CodeSample = CodeSample {
    title: "Workflow N8N",
    icon: Icon::Workflow,
    language: "json",
    code: r#"// Workflow N8N para processamento automatizado
{
  "name": "Data Processing Pipeline",
  "nodes": [
    {
      "name": "Schedule Trigger",
      "type": "n8n-nodes-base.cron",
      "parameters": {
        "triggerTimes": {
          "hour": 2,
          "minute": 0
        }
      }
    },
    {
      "name": "Fetch New Data",
      "type": "n8n-nodes-base.httpRequest",
      "parameters": {
        "url": "https://api.example.com/data",
        "authentication": "headerAuth"
      }
    },
    {
      "name": "Process with Python",
      "type": "n8n-nodes-base.code",
      "parameters": {
        "mode": "runOnceForAllItems",
        "jsCode": "// Processamento customizado dos dados"
      }
    }
  ]
}"#,
};

pub const METRICS: &[Metric] = &[
    Metric { value: "+85.4k", label: "Total de dados processados" },
    Metric { value: "<5min", label: "Tempo médio de processamento" },
    Metric { value: "~70%", label: "Taxa de acurácia" },
];
