use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkFailure {
    pub id: String,
    pub message: String,
}

/// Outcome of a sequential bulk delete.
///
/// Every id is attempted once, in selection order; failures do not stop
/// the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDeleteReport {
    pub deleted: Vec<String>,
    pub failed: Vec<BulkFailure>,
}

impl BulkDeleteReport {
    pub fn record_deleted(&mut self, id: impl Into<String>) {
        self.deleted.push(id.into());
    }

    pub fn record_failed(&mut self, id: impl Into<String>, message: impl Into<String>) {
        self.failed.push(BulkFailure {
            id: id.into(),
            message: message.into(),
        });
    }

    /// Marks every id as failed with the same message (single request batches)
    pub fn fail_all(ids: &[String], message: &str) -> Self {
        let mut report = Self::default();
        for id in ids {
            report.record_failed(id.clone(), message);
        }
        report
    }

    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn summary(&self) -> String {
        match (self.deleted.len(), self.failed.len()) {
            (0, 0) => "Nenhum item selecionado.".to_string(),
            (1, 0) => "1 item apagado com sucesso.".to_string(),
            (n, 0) => format!("{} itens apagados com sucesso.", n),
            (ok, failed) => {
                let first = &self.failed[0].message;
                format!(
                    "{} de {} itens apagados. {} falharam: {}",
                    ok,
                    ok + failed,
                    failed,
                    first
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_report_summary() {
        let mut report = BulkDeleteReport::default();
        report.record_deleted("a");
        report.record_deleted("b");
        assert!(report.is_complete());
        assert_eq!(report.attempted(), 2);
        assert_eq!(report.summary(), "2 itens apagados com sucesso.");
    }

    #[test]
    fn test_partial_failure_summary() {
        let mut report = BulkDeleteReport::default();
        report.record_deleted("a");
        report.record_failed("b", "Sem permissão");
        assert!(!report.is_complete());
        assert_eq!(report.summary(), "1 de 2 itens apagados. 1 falharam: Sem permissão");
    }

    #[test]
    fn test_fail_all_keeps_order() {
        let ids = vec!["x".to_string(), "y".to_string()];
        let report = BulkDeleteReport::fail_all(&ids, "Erro");
        let failed: Vec<&str> = report.failed.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(failed, vec!["x", "y"]);
        assert!(report.deleted.is_empty());
    }
}
