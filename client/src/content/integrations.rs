//! Integrations page content: connector catalogue, samples and practices.

use crate::icon::Icon;

use super::{CodeSample, InfoCard};

pub const LEAD: &str = "Conectores e APIs que permitem ao CralLabs comunicar com sistemas externos, automatizar processos e sincronizar dados em tempo real.";

/// A single connector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Integration {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: &'static str,
    pub method: &'static str,
    pub frequency: &'static str,
}

/// A group of related connectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub icon: Icon,
    pub description: &'static str,
    pub items: &'static [Integration],
}

pub const CATEGORIES: &[Category] = &[
    Category {
        name: "APIs Externas",
        icon: Icon::Globe,
        description: "Conexões com serviços de terceiros para enriquecimento de dados",
        items: &[
            Integration {
                name: "OpenAI API",
                description: "Processamento de linguagem natural e geração de embeddings",
                kind: "IA/ML",
                method: "REST API",
                frequency: "Tempo real",
            },
            Integration {
                name: "Google Sheets API",
                description: "Sincronização de dados de planilhas corporativas",
                kind: "Dados",
                method: "OAuth 2.0",
                frequency: "Diário",
            },
            Integration {
                name: "Senior Sistemas ERP",
                description: "Integração com ERP da Senior para extração de dados internos e financeiros",
                kind: "ERP",
                method: "REST API / SQL Connector",
                frequency: "Diário",
            },
        ],
    },
    Category {
        name: "Formulários Inteligentes",
        icon: Icon::Code,
        description: "Interfaces dinâmicas para coleta e processamento de dados",
        items: &[
            Integration {
                name: "Formulário de Concorrentes",
                description: "Análise automatizada de dados de competidores",
                kind: "Análise",
                method: "Zod Validation",
                frequency: "Semanal",
            },
            Integration {
                name: "Upload de Documentos",
                description: "Processamento automático de PDFs e extração de dados",
                kind: "Documentos",
                method: "Supabase Storage",
                frequency: "Sob demanda",
            },
        ],
    },
    Category {
        name: "Workflows N8N",
        icon: Icon::Settings,
        description: "Automações visuais para processos complexos",
        items: &[
            Integration {
                name: "Processamento de Documentos PDF",
                description: "Extração automática de informações relevantes a partir de PDFs",
                kind: "Documentos",
                method: "OCR + Parsing",
                frequency: "Sob demanda",
            },
            Integration {
                name: "Registros dos Concorrentes",
                description: "Automação do tratamento e padronização de dados submetidos pelos concorrentes",
                kind: "Concorrência",
                method: "N8N Pipelines",
                frequency: "Semanal",
            },
            Integration {
                name: "Backup Automatizado",
                description: "Rotina de backup de dados críticos para múltiplos destinos",
                kind: "Infraestrutura",
                method: "Scheduled Jobs",
                frequency: "Diário",
            },
            Integration {
                name: "Relatórios Semanais",
                description: "Geração e distribuição automática de relatórios",
                kind: "Relatórios",
                method: "Cron Jobs",
                frequency: "Semanal",
            },
        ],
    },
];

pub const WEBHOOK_SAMPLE: CodeSample = CodeSample {
    title: "Webhook Handler",
    icon: Icon::Webhook,
    language: "typescript",
    code: r"// Exemplo de webhook para integração em tempo real
export async function handleWebhook(request: Request) {
  const payload = await request.json();

  // Validação de segurança
  const signature = request.headers.get('x-signature');
  if (!verifySignature(payload, signature)) {
    return new Response('Unauthorized', { status: 401 });
  }

  // Processamento baseado no tipo de evento
  switch (payload.event_type) {
    case 'user.created':
      await processNewUser(payload.data);
      break;
    case 'data.updated':
      await updateDataPipeline(payload.data);
      break;
    case 'alert.triggered':
      await sendNotification(payload.data);
      break;
    default:
      console.log('Evento não reconhecido:', payload.event_type);
  }

  return new Response('OK', { status: 200 });
}

// Processamento de novo usuário
async function processNewUser(userData: any) {
  const { data, error } = await supabase
    .from('users')
    .insert({
      external_id: userData.id,
      email: userData.email,
      metadata: userData.properties,
      created_at: new Date().toISOString()
    });

  if (!error) {
    // Dispara workflow de onboarding
    await triggerN8NWorkflow('user-onboarding', userData);
  }
}",
};

pub const N8N_SAMPLE: CodeSample = CodeSample {
    title: "Workflow N8N",
    icon: Icon::Settings,
    language: "json",
    code: r##"{
  "name": "Processamento de Formulário de Concorrente",
  "active": true,
  "nodes": [
    {
      "name": "Webhook Trigger",
      "type": "n8n-nodes-base.webhook",
      "parameters": {
        "httpMethod": "POST",
        "path": "competitor-form",
        "responseMode": "responseNode"
      }
    },
    {
      "name": "Validar Dados",
      "type": "n8n-nodes-base.code",
      "parameters": {
        "jsCode": "// Validação com Zod schema\nconst schema = z.object({\n  company_name: z.string().min(1),\n  website: z.string().url(),\n  category: z.string(),\n  analysis_type: z.enum(['pricing', 'features', 'marketing'])\n});\n\nconst validation = schema.safeParse($json.body);\nif (!validation.success) {\n  throw new Error('Dados inválidos');\n}\n\nreturn [{ json: validation.data }];"
      }
    },
    {
      "name": "Analisar Website",
      "type": "n8n-nodes-base.httpRequest",
      "parameters": {
        "url": "https://api.example.com/analyze",
        "method": "POST",
        "body": {
          "website": "={{ $json.website }}",
          "type": "={{ $json.analysis_type }}"
        }
      }
    },
    {
      "name": "Salvar no Supabase",
      "type": "n8n-nodes-base.supabase",
      "parameters": {
        "operation": "insert",
        "table": "competitor_analysis",
        "data": {
          "company_name": "={{ $json.company_name }}",
          "analysis_data": "={{ $json.analysis_result }}",
          "processed_at": "={{ new Date().toISOString() }}"
        }
      }
    },
    {
      "name": "Notificar Equipe",
      "type": "n8n-nodes-base.slack",
      "parameters": {
        "channel": "#analytics",
        "text": "Nova análise de concorrente: {{ $json.company_name }}"
      }
    }
  ]
}"##,
};

pub const PRACTICES: &[InfoCard] = &[
    InfoCard {
        icon: Icon::Database,
        title: "Autenticação",
        description: "OAuth 2.0, API keys com rotação automática e validação de signatures para webhooks.",
    },
    InfoCard {
        icon: Icon::Puzzle,
        title: "Rate Limiting",
        description: "Controle de taxa para evitar sobrecarga de APIs externas e implementação de retry policies.",
    },
    InfoCard {
        icon: Icon::Settings,
        title: "Monitoramento",
        description: "Logs detalhados, alertas de falhas e dashboards de performance para todas as integrações.",
    },
];
