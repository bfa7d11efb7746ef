pub mod code_form;
pub mod relation_graph;
pub mod result_data;
