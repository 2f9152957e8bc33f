use super::*;

use std::collections::HashSet;

use crate::state::route::Page;

fn assert_numbered_in_order(steps: &[u8]) {
    let expected: Vec<u8> = (1..=u8::try_from(steps.len()).unwrap()).collect();
    assert_eq!(steps, expected.as_slice());
}

// =============================================================
// Agents
// =============================================================

#[test]
fn agent_ids_are_unique() {
    let ids: HashSet<_> = agents::AGENTS.iter().map(|a| a.id).collect();
    assert_eq!(ids.len(), agents::AGENTS.len());
}

#[test]
fn agent_interactions_resolve_to_other_agents() {
    for agent in agents::AGENTS {
        for id in agent.interactions {
            let other = agents::agent_by_id(id).unwrap_or_else(|| panic!("{} references unknown {id}", agent.id));
            assert_ne!(other.id, agent.id, "{} lists itself", agent.id);
        }
    }
}

#[test]
fn interaction_names_join_display_names() {
    let chatbot = agents::agent_by_id("pricing-chatbot").unwrap();
    assert_eq!(agents::interaction_names(chatbot), "Weekly Report Generator, Invoicing Extractor");
}

#[test]
fn interaction_names_skip_unknown_ids() {
    let orphan = agents::Agent { interactions: &["missing", "weekly-report"], ..agents::AGENTS[0] };
    assert_eq!(agents::interaction_names(&orphan), "Weekly Report Generator");
}

#[test]
fn communication_flow_is_numbered() {
    let steps: Vec<_> = agents::COMMUNICATION_FLOW.iter().map(|s| s.step).collect();
    assert_numbered_in_order(&steps);
}

// =============================================================
// Overview / Architecture / Pipeline
// =============================================================

#[test]
fn overview_features_link_to_every_non_root_page_once() {
    let links: HashSet<_> = overview::FEATURES.iter().map(|f| f.link).collect();
    assert_eq!(links.len(), overview::FEATURES.len());
    assert!(!links.contains(&Page::Overview));
    assert_eq!(links.len(), Page::ALL.len() - 1);
}

#[test]
fn architecture_flows_are_numbered() {
    for flow in [architecture::INTERNAL_FLOW, architecture::EXTERNAL_FLOW] {
        let steps: Vec<_> = flow.iter().map(|s| s.step).collect();
        assert_numbered_in_order(&steps);
    }
}

#[test]
fn pipeline_stages_are_numbered() {
    let ids: Vec<_> = pipeline::STAGES.iter().map(|s| s.id).collect();
    assert_numbered_in_order(&ids);
}

#[test]
fn code_samples_are_not_empty() {
    for sample in [
        agents::CODE_SAMPLE,
        pipeline::RPC_SAMPLE,
        pipeline::EMBEDDING_SAMPLE,
        pipeline::AUTOMATION_SAMPLE,
        integrations::WEBHOOK_SAMPLE,
        integrations::N8N_SAMPLE,
    ] {
        assert!(!sample.code.trim().is_empty(), "{} is empty", sample.title);
    }
}

// =============================================================
// Deployment / Roadmap
// =============================================================

#[test]
fn config_entry_joins_list_values() {
    let env = deployment::LAYERS[0]
        .configuration
        .iter()
        .find(|c| c.label == "Environment Variables")
        .unwrap();
    assert_eq!(env.display_value(), "SUPABASE_URL, SUPABASE_ANON_KEY, OPENAI_API_KEY");
}

#[test]
fn only_uptime_is_excellent() {
    let excellent: Vec<_> = deployment::MONITORING
        .iter()
        .filter(|m| m.status == deployment::MetricStatus::Excellent)
        .map(|m| m.metric)
        .collect();
    assert_eq!(excellent, vec!["Uptime (30d)"]);
}

#[test]
fn fully_delivered_phases_are_not_planned() {
    for phase in roadmap::PHASES {
        if phase.items.iter().all(|d| d.completed) {
            assert_ne!(phase.status, roadmap::RoadmapStatus::Planned, "{}", phase.title);
        }
    }
}

#[test]
fn completed_phases_have_no_pending_deliverables() {
    for phase in roadmap::PHASES.iter().filter(|p| p.status == roadmap::RoadmapStatus::Completed) {
        assert!(phase.items.iter().all(|d| d.completed), "{}", phase.title);
    }
}

#[test]
fn last_phase_carries_focus_note() {
    let last = roadmap::PHASES.last().unwrap();
    assert_eq!(last.note.map(roadmap::PhaseNote::heading), Some("Foco"));
    assert!(roadmap::PHASES[..roadmap::PHASES.len() - 1]
        .iter()
        .all(|p| matches!(p.note, Some(roadmap::PhaseNote::Learnings(_)))));
}

#[test]
fn complexity_warning_covers_high_levels() {
    assert!(roadmap::Complexity::High.is_demanding());
    assert!(roadmap::Complexity::VeryHigh.is_demanding());
    assert!(!roadmap::Complexity::Medium.is_demanding());
}

#[test]
fn status_labels_are_portuguese() {
    assert_eq!(roadmap::RoadmapStatus::Completed.label(), "Concluído");
    assert_eq!(roadmap::RoadmapStatus::InProgress.label(), "Em Progresso");
    assert_eq!(roadmap::RoadmapStatus::Planned.label(), "Planejado");
}
