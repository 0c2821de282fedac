use comfy_table::Table;
use indicatif::ProgressBar;
use rotas_client::{
    route_block::RouteBlock,
    surface::{ResultContainer, UserAlert},
};

/// Collects route blocks and prints them as a table.
#[derive(Debug, Default)]
pub struct TableContainer {
    blocks: Vec<RouteBlock>,
    message: Option<String>,
}

impl TableContainer {
    pub fn render(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }

        let mut table = Table::new();
        table.set_header(vec!["Rota", "Caminho", "Distância", "Custo", "Tempo"]);
        for block in &self.blocks {
            table.add_row(vec![
                block.label.as_str(),
                block.path.as_str(),
                block.distance.as_str(),
                block.cost.as_str(),
                block.time.as_str(),
            ]);
        }

        table.to_string()
    }
}

impl ResultContainer for TableContainer {
    fn clear(&mut self) {
        self.blocks.clear();
        self.message = None;
    }

    fn append_block(&mut self, block: RouteBlock) {
        self.blocks.push(block);
    }

    fn show_message(&mut self, message: &str) {
        self.blocks.clear();
        self.message = Some(message.to_string());
    }
}

/// Prints alerts on stderr with the spinner hidden, so clearing the
/// spinner afterwards does not wipe the alert line.
pub struct SpinnerAlert {
    spinner: ProgressBar,
}

impl SpinnerAlert {
    pub fn new(spinner: ProgressBar) -> Self {
        Self { spinner }
    }
}

impl UserAlert for SpinnerAlert {
    fn alert(&self, message: &str) {
        self.spinner.suspend(|| eprintln!("{}", message));
    }
}
