pub mod tab_contents;
