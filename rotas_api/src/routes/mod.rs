pub mod melhor_rota;
pub mod rotas;
