/*!
# `INPUT <string variable>`

## Purpose
Read a line from the keyboard into a string variable.

## Remarks
Only string variables can be read. Ctrl-C interrupts the read and leaves
the variable unchanged.

## Example
```text
10 INPUT n$
20 PRINT n$
```

*/
