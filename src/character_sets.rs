/// Delimiter classification for the part scanners
/// Bit 0 = ends a host, bit 1 = ends a path
const DELIMITER_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    // Host ends at the path, the query or a port
    table[b'/' as usize] |= HOST_END;
    table[b'?' as usize] |= HOST_END;
    table[b':' as usize] |= HOST_END;

    // Path ends at the query, fragment, or the first dot
    table[b'?' as usize] |= PATH_END;
    table[b'.' as usize] |= PATH_END;
    table[b'#' as usize] |= PATH_END;

    table
};

const HOST_END: u8 = 1;
const PATH_END: u8 = 2;

/// Check if a byte terminates a host
pub fn is_host_delimiter(b: u8) -> bool {
    DELIMITER_TABLE[b as usize] & HOST_END != 0
}

/// Check if a byte terminates a path
pub fn is_path_delimiter(b: u8) -> bool {
    DELIMITER_TABLE[b as usize] & PATH_END != 0
}
