/*!
# `LOAD "<name>"`

## Purpose
Replace the program in memory with one from the program host.

## Remarks
The current program and all variables are deleted first. A dot is shown
for every line received. Lines that fail to load are reported and
skipped. Ctrl-C abandons the transfer.

## Example
```text
LOAD "hello"
Loading.....
Ready.
```

*/
