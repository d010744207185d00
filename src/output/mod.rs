pub mod edge_list;
